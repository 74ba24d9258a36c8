/// File categorization by extension.
///
/// Every file name resolves to exactly one [`Category`]. The extension table is
/// fixed at compile time; [`FileMapper`] turns it into a lookup map once and
/// never changes it afterwards.
///
/// # Examples
///
/// ```
/// use organize::file_category::{Category, FileMapper};
///
/// let mapper = FileMapper::default();
/// assert_eq!(mapper.classify("photo.JPG"), Category::Images);
/// assert_eq!(mapper.classify("report.pdf"), Category::Documents);
/// assert_eq!(mapper.classify("notes"), Category::Others);
/// ```
use std::collections::HashMap;
use std::path::Path;

/// Represents a broad file category.
///
/// Each category doubles as the name of its destination folder in type mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Image files (PNG, JPG, GIF, etc.)
    Images,
    /// Document files (PDF, DOCX, TXT, etc.)
    Documents,
    /// Spreadsheet files (XLSX, CSV, ODS, etc.)
    Spreadsheets,
    /// Presentation files (PPTX, ODP, KEY)
    Presentations,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Archive files (ZIP, RAR, 7Z, etc.)
    Archives,
    /// Source code files
    Code,
    /// Installers and executables (EXE, DMG, DEB, etc.)
    Executables,
    /// Anything without a recognized extension
    Others,
}

impl Category {
    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use organize::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Spreadsheets => "Spreadsheets",
            Category::Presentations => "Presentations",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Executables => "Executables",
            Category::Others => "Others",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Known extensions per category, lower-case and without the leading dot.
const EXTENSION_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Images,
        &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "tiff"],
    ),
    (
        Category::Documents,
        &["pdf", "doc", "docx", "txt", "rtf", "odt", "pages"],
    ),
    (
        Category::Spreadsheets,
        &["xls", "xlsx", "csv", "ods", "numbers"],
    ),
    (Category::Presentations, &["ppt", "pptx", "odp", "key"]),
    (
        Category::Videos,
        &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "m4v"],
    ),
    (
        Category::Audio,
        &["mp3", "wav", "flac", "aac", "ogg", "wma", "m4a"],
    ),
    (
        Category::Archives,
        &["zip", "rar", "7z", "tar", "gz", "bz2", "xz"],
    ),
    (
        Category::Code,
        &[
            "py", "js", "html", "css", "java", "cpp", "c", "php", "rb", "go",
        ],
    ),
    (
        Category::Executables,
        &["exe", "msi", "dmg", "pkg", "deb", "rpm", "app"],
    ),
];

/// Maps file extensions to categories.
///
/// Built once from the static extension table; lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct FileMapper {
    extension_map: HashMap<&'static str, Category>,
}

impl FileMapper {
    /// Creates a new `FileMapper` with the standard extension table.
    pub fn new() -> Self {
        let extension_map = EXTENSION_TABLE
            .iter()
            .flat_map(|(category, extensions)| extensions.iter().map(move |ext| (*ext, *category)))
            .collect();
        Self { extension_map }
    }

    /// Maps a bare extension (no leading dot) to a category.
    ///
    /// # Examples
    ///
    /// ```
    /// use organize::file_category::{Category, FileMapper};
    ///
    /// let mapper = FileMapper::default();
    /// assert_eq!(mapper.extension_to_category("PNG"), Some(Category::Images));
    /// assert_eq!(mapper.extension_to_category("xyz"), None);
    /// ```
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.extension_map.get(ext.to_lowercase().as_str()).copied()
    }

    /// Determines the category for a file name.
    ///
    /// The extension is the text after the last `.`; a name whose only dot is
    /// the leading one (`.bashrc`) has no extension. Unknown or missing
    /// extensions resolve to [`Category::Others`].
    pub fn classify(&self, file_name: &str) -> Category {
        Path::new(file_name)
            .extension()
            .map(|ext| ext.to_string_lossy())
            .and_then(|ext| self.extension_to_category(&ext))
            .unwrap_or(Category::Others)
    }
}

impl Default for FileMapper {
    fn default() -> Self {
        Self::new()
    }
}
