use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: std::io::Error },
    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),
    #[error("none of the images in {0:?} could be loaded")]
    NothingLoaded(PathBuf),
    #[error("failed to read file {path:?}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("failed to decode image {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("failed to create texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
}

const EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Quarter turns needed to display a picture upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Turn {
    /// 1 is upright, 3/6/8 are rotations; the mirrored orientations are shown as stored.
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Turn::Half,
            6 => Turn::Clockwise,
            8 => Turn::CounterClockwise,
            _ => Turn::None,
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

/// Image files directly inside `dir_path`, sorted by file name.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir_path)
        .map_err(|source| LoadError::ReadDir { path: dir_path.to_path_buf(), source })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| LoadError::ReadDir { path: dir_path.to_path_buf(), source })?
            .path();
        if path.is_file() && EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(LoadError::NoImages(dir_path.to_path_buf()))
    } else {
        debug!(count = paths.len(), dir = ?dir_path, "found images");
        Ok(paths)
    }
}

/// EXIF orientation tag of a JPEG, if it carries one.
pub fn read_orientation(file_bytes: &[u8]) -> Option<u16> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(file_bytes)).ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, LoadError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| LoadError::ReadFile { path: image_path.to_path_buf(), source })?;

    let extension = extension_of(image_path);
    let turn = if extension == "jpg" || extension == "jpeg" {
        match read_orientation(&file_bytes) {
            Some(orientation) => Turn::from_orientation(orientation),
            None => {
                debug!(path = ?image_path, "no EXIF orientation");
                Turn::None
            }
        }
    } else {
        Turn::None
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| LoadError::Decode { path: image_path.to_path_buf(), reason: e.to_string() })?;

    match turn {
        Turn::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Turn::Clockwise => image.rotate_cw(),
        Turn::CounterClockwise => image.rotate_ccw(),
        Turn::None => {}
    }
    if turn != Turn::None {
        debug!(path = ?image_path, ?turn, "applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Texture { path: image_path.to_path_buf(), reason: e.to_string() })
}

/// One texture per loadable image in `dir_path`; unreadable files are skipped.
pub fn load_directory(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir_path: &Path,
) -> Result<Vec<Texture2D>, LoadError> {
    let mut textures = Vec::new();
    for path in load_sorted_image_paths(dir_path)? {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("skipping image: {}", e),
        }
    }
    if textures.is_empty() {
        return Err(LoadError::NothingLoaded(dir_path.to_path_buf()));
    }
    Ok(textures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn lists_images_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "c.jpeg", "notes.txt", "d.gif", "e.bmp"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<String> = load_sorted_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.jpeg", "d.gif", "e.bmp"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("readme.md")).unwrap();

        assert!(matches!(
            load_sorted_image_paths(dir.path()),
            Err(LoadError::NoImages(_))
        ));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");

        assert!(matches!(
            load_sorted_image_paths(&missing),
            Err(LoadError::ReadDir { .. })
        ));
    }

    #[test]
    fn orientation_maps_to_turns() {
        assert_eq!(Turn::from_orientation(1), Turn::None);
        assert_eq!(Turn::from_orientation(3), Turn::Half);
        assert_eq!(Turn::from_orientation(6), Turn::Clockwise);
        assert_eq!(Turn::from_orientation(8), Turn::CounterClockwise);
        assert_eq!(Turn::from_orientation(2), Turn::None);
    }

    #[test]
    fn bytes_without_exif_have_no_orientation() {
        assert_eq!(read_orientation(b"definitely not a jpeg"), None);
        assert_eq!(read_orientation(&[]), None);
    }
}
