//! Подгонка высоты встроенного фрейма под содержимое.

use contracts::shared::catalog::detail::fitted_frame_height;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlIFrameElement};

/// Высота содержимого фрейма, если документ доступен (тот же origin)
pub fn content_height(iframe: &HtmlIFrameElement) -> Option<i32> {
    let document = iframe.content_document()?;
    let body = document.body()?;
    Some(body.scroll_height())
}

/// Обработчик `load`: выставить высоту по содержимому или оставить
/// высоту по умолчанию
pub fn fit_on_load(ev: Event) {
    let Some(iframe) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlIFrameElement>().ok())
    else {
        return;
    };

    match fitted_frame_height(content_height(&iframe)) {
        Some(height) => {
            if let Err(err) = iframe
                .style()
                .set_property("height", &format!("{}px", height))
            {
                log::debug!("frame height not applied: {:?}", err);
            }
        }
        None => log::debug!("frame content not measurable, keeping default height"),
    }
}
