use std::cell::RefCell;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, HtmlOptionElement,
    HtmlSelectElement,
};

use catalog::ProductCatalog;
use preview::{
    LoadSequencer, LoadTicket, OverlayKind, PreviewCommand, Selection, model_options, plan_overlay,
};

// Element ids the host page must provide before the module is loaded.
const MANUFACTURER_SELECT_ID: &str = "manufacturer-select";
const MODEL_SELECT_ID: &str = "model-select";
const DESIGN_SELECT_ID: &str = "design-select";
const MATERIAL_SELECT_ID: &str = "material-select";
const PREVIEW_CANVAS_ID: &str = "preview-canvas";

// Guard to prevent double-initialization of global state (relevant during hot reload).
static INITIALIZED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_SET: OnceLock<()> = OnceLock::new();

struct AppState {
    catalog: ProductCatalog,
    selection: Selection,
    canvas: Option<HtmlCanvasElement>,
    ctx: Option<CanvasRenderingContext2d>,
    /// One sequencer for the shared preview surface: design and material
    /// loads invalidate each other, matching last-draw-wins semantics.
    sequencer: LoadSequencer,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState {
        catalog: ProductCatalog::builtin(),
        selection: Selection::default(),
        canvas: None,
        ctx: None,
        sequencer: LoadSequencer::new(),
    });
}

fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&RefCell<AppState>) -> R,
{
    STATE.with(|state| f(state))
}

fn init_panic_hook() {
    PANIC_HOOK_SET.get_or_init(|| {
        console_error_panic_hook::set_once();
    });
}

/// Module entry point. The host page loads this as a deferred module
/// script, so the five required elements are already parsed; any missing
/// element is a fatal startup error.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_panic_hook();
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    wire_document()
}

fn wire_document() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let manufacturer_select = select_by_id(&document, MANUFACTURER_SELECT_ID)?;
    let model_select = select_by_id(&document, MODEL_SELECT_ID)?;
    let design_select = select_by_id(&document, DESIGN_SELECT_ID)?;
    let material_select = select_by_id(&document, MATERIAL_SELECT_ID)?;

    let canvas = document
        .get_element_by_id(PREVIEW_CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("missing preview-canvas"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    with_state(|state| {
        let mut s = state.borrow_mut();
        s.canvas = Some(canvas);
        s.ctx = Some(ctx);
    });

    wire_manufacturer_select(&manufacturer_select, &model_select)?;
    wire_model_select(&model_select)?;
    wire_overlay_select(&design_select, OverlayKind::Design)?;
    wire_overlay_select(&material_select, OverlayKind::Material)?;

    Ok(())
}

fn select_by_id(document: &Document, id: &str) -> Result<HtmlSelectElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing {id}")))?
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| JsValue::from_str(&format!("{id} is not a <select>")))
}

fn wire_manufacturer_select(
    manufacturer_select: &HtmlSelectElement,
    model_select: &HtmlSelectElement,
) -> Result<(), JsValue> {
    let manufacturer_for_cb = manufacturer_select.clone();
    let model_for_cb = model_select.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let value = manufacturer_for_cb.value();
        if let Err(err) = repopulate_models(&model_for_cb, &value) {
            web_sys::console::error_1(&err);
        }
    });
    manufacturer_select
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

/// Destructively replaces the model select's option list: the placeholder
/// first, then the manufacturer's models in catalog order.
fn repopulate_models(model_select: &HtmlSelectElement, manufacturer: &str) -> Result<(), JsValue> {
    let options = with_state(|state| {
        let mut s = state.borrow_mut();
        s.selection.set_manufacturer(manufacturer);
        model_options(&s.catalog, manufacturer)
    })
    .map_err(|err| JsValue::from_str(&err.to_string()))?;

    model_select.set_length(0);
    for option in &options {
        let element = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value)?;
        model_select.add_with_html_option_element(&element)?;
    }
    Ok(())
}

fn wire_model_select(model_select: &HtmlSelectElement) -> Result<(), JsValue> {
    let model_for_cb = model_select.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let value = model_for_cb.value();
        with_state(|state| state.borrow_mut().selection.set_model(&value));
    });
    model_select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn wire_overlay_select(select: &HtmlSelectElement, kind: OverlayKind) -> Result<(), JsValue> {
    let select_for_cb = select.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let value = select_for_cb.value();
        with_state(|state| state.borrow_mut().selection.set_overlay(kind, &value));
        apply_overlay(&value);
    });
    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn apply_overlay(value: &str) {
    match plan_overlay(value) {
        PreviewCommand::Clear => clear_surface(),
        PreviewCommand::Load { url } => {
            let ticket = with_state(|state| state.borrow_mut().sequencer.begin());
            if let Err(err) = begin_image_load(&url, ticket) {
                web_sys::console::error_1(&err);
            }
        }
    }
}

fn clear_surface() {
    with_state(|state| {
        let mut s = state.borrow_mut();
        // Advance the sequence so an in-flight load cannot draw over the clear.
        s.sequencer.invalidate();
        if let (Some(canvas), Some(ctx)) = (&s.canvas, &s.ctx) {
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }
    });
}

fn begin_image_load(url: &str, ticket: LoadTicket) -> Result<(), JsValue> {
    let img = HtmlImageElement::new()?;

    let img_for_onload = img.clone();
    let onload = Closure::once(move || draw_if_current(&img_for_onload, ticket));
    img.set_onload(Some(onload.as_ref().unchecked_ref::<js_sys::Function>()));
    onload.forget();

    // The original page ignored load failures outright; surfacing them on
    // the console keeps the on-screen behavior identical (the previous
    // contents stay put) while making broken asset paths observable.
    let url_for_onerror = url.to_string();
    let onerror = Closure::once(move || {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "preview image failed to load: {url_for_onerror}"
        )));
    });
    img.set_onerror(Some(onerror.as_ref().unchecked_ref::<js_sys::Function>()));
    onerror.forget();

    img.set_src(url);
    Ok(())
}

fn draw_if_current(img: &HtmlImageElement, ticket: LoadTicket) {
    with_state(|state| {
        let s = state.borrow();
        if !s.sequencer.is_current(ticket) {
            // A newer selection won the race while this image decoded.
            return;
        }
        if let (Some(canvas), Some(ctx)) = (&s.canvas, &s.ctx) {
            let result = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                0.0,
                0.0,
                canvas.width() as f64,
                canvas.height() as f64,
            );
            if let Err(err) = result {
                web_sys::console::error_1(&err);
            }
        }
    });
}

/// Returns the current preview as a PNG data URL, for the page's
/// "export preview" affordance.
#[wasm_bindgen]
pub fn export_preview_png() -> Result<String, JsValue> {
    with_state(|state| {
        let s = state.borrow();
        let canvas = s
            .canvas
            .as_ref()
            .ok_or_else(|| JsValue::from_str("preview canvas not initialized"))?;
        canvas.to_data_url()
    })
}

/// Serialized order summary for the host page, or `"null"` while the
/// selection is incomplete.
#[wasm_bindgen]
pub fn order_summary_json() -> Result<String, JsValue> {
    with_state(|state| {
        let s = state.borrow();
        let summary = s.selection.order_summary(&s.catalog);
        serde_json::to_string(&summary).map_err(|err| JsValue::from_str(&err.to_string()))
    })
}
