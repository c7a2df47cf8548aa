//! Выбор формы детального содержимого карточки.

/// Разрешения встроенного фрейма
pub const FRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Отступ, добавляемый к измеренной высоте содержимого фрейма, px
pub const FRAME_HEIGHT_PADDING: i32 = 16;

/// Данные элемента, из которых строится детальное содержимое
pub trait DetailSource {
    /// Элемент помечен как текстовый (структурированный)
    fn is_text_only(&self) -> bool;
    fn paragraphs(&self) -> &[String];
    fn steps(&self) -> &[String];
    fn frame_url(&self) -> Option<&str>;
    fn frame_title(&self) -> &str;
}

/// Параметры встроенного фрейма
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpec {
    pub src: String,
    pub title: String,
    pub allow: &'static str,
    pub allow_fullscreen: bool,
    pub lazy: bool,
}

/// Детальное содержимое, вычисляется один раз при построении карточки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    /// Абзацы, затем нумерованные шаги; без сетевых запросов
    Structured {
        paragraphs: Vec<String>,
        steps: Vec<String>,
    },
    Frame(FrameSpec),
    /// Содержимого нет
    Unavailable(String),
}

/// Приоритет: текст → фрейм → сообщение-заглушка
pub fn resolve_detail<S: DetailSource>(
    source: &S,
    default_frame_title: &str,
    unavailable_message: &str,
) -> DetailContent {
    let paragraphs = source.paragraphs();
    let steps = source.steps();

    if source.is_text_only() && (!paragraphs.is_empty() || !steps.is_empty()) {
        return DetailContent::Structured {
            paragraphs: paragraphs.to_vec(),
            steps: steps.to_vec(),
        };
    }

    if let Some(url) = source.frame_url().filter(|u| !u.is_empty()) {
        let title = if source.frame_title().is_empty() {
            default_frame_title
        } else {
            source.frame_title()
        };
        return DetailContent::Frame(FrameSpec {
            src: url.to_string(),
            title: title.to_string(),
            allow: FRAME_ALLOW,
            allow_fullscreen: true,
            lazy: true,
        });
    }

    DetailContent::Unavailable(unavailable_message.to_string())
}

/// Высота фрейма по измеренной высоте содержимого.
///
/// `None` на входе означает, что содержимое прочитать нельзя (чужой origin
/// или документ ещё пуст): это штатный исход, фрейм остаётся с высотой
/// по умолчанию.
pub fn fitted_frame_height(content_height: Option<i32>) -> Option<u32> {
    let height = content_height.filter(|h| *h > 0)?;
    u32::try_from(height + FRAME_HEIGHT_PADDING).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_howto::{HowtoFormat, HowtoItem};

    fn guide(format: HowtoFormat, url: Option<&str>, steps: &[&str], body: &[&str]) -> HowtoItem {
        HowtoItem {
            id: "g".to_string(),
            title: "Guide".to_string(),
            format: Some(format),
            url: url.map(str::to_string),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            body: body.iter().map(|s| s.to_string()).collect(),
            ..HowtoItem::default()
        }
    }

    #[test]
    fn test_text_only_with_steps_wins_over_url() {
        let item = guide(
            HowtoFormat::TextOnly,
            Some("https://example.com"),
            &["Open the app", "Sign in"],
            &[],
        );
        match resolve_detail(&item, "Help guide", "none") {
            DetailContent::Structured { paragraphs, steps } => {
                assert!(paragraphs.is_empty());
                assert_eq!(steps, vec!["Open the app", "Sign in"]);
            }
            other => panic!("expected structured content, got {:?}", other),
        }
    }

    #[test]
    fn test_video_with_url_renders_frame() {
        let item = guide(HowtoFormat::Video, Some("https://video.example/embed"), &[], &[]);
        match resolve_detail(&item, "Help guide", "none") {
            DetailContent::Frame(frame) => {
                assert_eq!(frame.src, "https://video.example/embed");
                assert_eq!(frame.title, "Guide");
                assert!(frame.lazy);
                assert!(frame.allow.contains("picture-in-picture"));
            }
            other => panic!("expected frame, got {:?}", other),
        }
    }

    #[test]
    fn test_steps_without_text_only_flag_use_frame() {
        let item = guide(HowtoFormat::HtmlEmbed, Some("guide.html"), &["step"], &[]);
        assert!(matches!(
            resolve_detail(&item, "Help guide", "none"),
            DetailContent::Frame(_)
        ));
    }

    #[test]
    fn test_text_only_without_content_falls_through() {
        let item = guide(HowtoFormat::TextOnly, None, &[], &[]);
        assert_eq!(
            resolve_detail(&item, "Help guide", "No link yet."),
            DetailContent::Unavailable("No link yet.".to_string())
        );

        let item = guide(HowtoFormat::TextOnly, Some(""), &[], &[]);
        assert!(matches!(
            resolve_detail(&item, "Help guide", "No link yet."),
            DetailContent::Unavailable(_)
        ));
    }

    #[test]
    fn test_paragraphs_come_with_steps() {
        let item = guide(HowtoFormat::TextOnly, None, &["one"], &["intro"]);
        assert_eq!(
            resolve_detail(&item, "Help guide", "none"),
            DetailContent::Structured {
                paragraphs: vec!["intro".to_string()],
                steps: vec!["one".to_string()],
            }
        );
    }

    #[test]
    fn test_fitted_frame_height() {
        assert_eq!(fitted_frame_height(Some(400)), Some(416));
        assert_eq!(fitted_frame_height(Some(0)), None);
        assert_eq!(fitted_frame_height(None), None);
    }
}
