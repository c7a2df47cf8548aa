use url::Url;

/// Расположение статических JSON файлов относительно страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub data_root: String,
    pub branding_root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_root: "data".to_string(),
            branding_root: "branding".to_string(),
        }
    }
}

impl SiteConfig {
    /// Путь к файлу данных, например `data/howto.json`
    pub fn data_path(&self, file: &str) -> String {
        join(&self.data_root, file)
    }

    /// Путь к файлу брендинга, например `branding/global.json`
    pub fn branding_path(&self, file: &str) -> String {
        join(&self.branding_root, file)
    }
}

/// Адрес файла относительно базового адреса документа.
///
/// Относительный путь разрешается от страницы, поэтому сайт работает и
/// из подкаталога. Если базовый адрес не разбирается, путь остаётся как есть.
pub fn resolve_asset(base: &str, path: &str) -> String {
    match Url::parse(base).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::debug!("cannot resolve {} against {:?}: {}", path, base, e);
            path.to_string()
        }
    }
}

fn join(root: &str, file: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", root, file.trim_start_matches('/'))
    }
}
