use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Расширения файлов которые мы считаем изображениями.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Результат поиска изображений.
#[derive(Debug, PartialEq)]
pub enum Discovery {
    /// Папки не было, мы её создали. Пользователю нужно положить туда файлы.
    Created,

    /// Найденные изображения в порядке обхода директории.
    Found(Vec<PathBuf>),
}

/// Ищет изображения в указанной директории. Поддиректории не обходятся.
pub fn discover(dir: &Path) -> Result {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        return Ok(Discovery::Created);
    }

    let mut images = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_file() && is_supported(&path) {
            images.push(path);
        }
    }

    Ok(Discovery::Found(images))
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}

pub type Result = std::result::Result<Discovery, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("read images directory: {0}")]
    Io(#[from] io::Error),
}
