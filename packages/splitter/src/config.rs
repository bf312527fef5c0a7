//! Configuration constants, heading patterns and options for the splitter.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// WordprocessingML main namespace.
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Markup-compatibility namespace (`mc:AlternateContent`).
pub const MC_NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";

/// Main document part inside a .docx package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Numbering definitions part.
pub const NUMBERING_PART: &str = "word/numbering.xml";

/// Style definitions part.
pub const STYLES_PART: &str = "word/styles.xml";

/// Headings with this many characters or more are treated as body prose.
pub const MAX_HEADING_CHARS: usize = 30;

/// File name of the front-matter (cover) chapter.
pub const FRONT_MATTER_FILE_NAME: &str = "封面.docx";

/// Manifest key for the unsplit input document.
pub const FULLTEXT_KEY: &str = "fulltext";

/// Prefix of the per-chapter manifest keys (`chapter1`, `chapter2`, ...).
pub const CHAPTER_KEY_PREFIX: &str = "chapter";

/// File extension of written chapters.
pub const DOCX_EXTENSION: &str = "docx";

/// File name of the YAML chapter manifest.
pub const MANIFEST_FILE_NAME: &str = "chapters.yaml";

/// Text placed between a numbering prefix and the paragraph text when the
/// level's suffix is `tab` (or unspecified).
pub const DEFAULT_GAP_TEXT: &str = "\t";

/// "第" + ordinal + "部分" or "章".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static CHAPTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第([一二三四五六七八九十零]{1,6}|[1-9][0-9]*)(部分|章)").expect("valid regex")
});

/// "第" + ordinal + "部分" only, accepting zero-padded digit runs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static PART_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第([一二三四五六七八九十]{1,2}|[0-9]+)部分").expect("valid regex")
});

/// Build the manifest key for the n-th emitted chapter (1-based).
#[must_use]
pub fn chapter_key(position: usize) -> String {
    format!("{CHAPTER_KEY_PREFIX}{position}")
}

/// Turn heading text into a file stem that is safe on every platform.
///
/// Path separators, reserved punctuation and control characters become `_`.
/// Returns `None` when nothing printable is left.
///
/// # Examples
/// ```
/// use chapter_splitter::config::sanitize_file_stem;
///
/// assert_eq!(sanitize_file_stem("第一章 绪论"), Some("第一章 绪论".to_string()));
/// assert_eq!(sanitize_file_stem("第二章 输入/输出"), Some("第二章 输入_输出".to_string()));
/// assert_eq!(sanitize_file_stem("   "), None);
/// ```
#[must_use]
pub fn sanitize_file_stem(heading: &str) -> Option<String> {
    let stem: String = heading
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim().trim_end_matches('.').trim();

    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

/// Whether deeper list levels restart when a shallower level advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Every (list, level) counter only ever increases.
    #[default]
    Never,

    /// Advancing a level clears the counters of all strictly deeper levels
    /// of the same list.
    OnShallowerAdvance,
}

/// Options for one split run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Directory the chapter files are written to. `None` means the
    /// directory containing the input.
    pub output_dir: Option<PathBuf>,

    /// Text used for the `tab` numbering suffix while matching headings.
    pub gap_text: String,

    /// Counter restart behaviour of the numbering resolver.
    pub restart: RestartPolicy,

    /// Write `chapters.yaml` next to the chapter files.
    pub write_manifest: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            gap_text: String::new(),
            restart: RestartPolicy::Never,
            write_manifest: true,
        }
    }
}

impl SplitOptions {
    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the gap text.
    #[must_use]
    pub fn with_gap_text(mut self, gap: impl Into<String>) -> Self {
        self.gap_text = gap.into();
        self
    }

    /// Set the restart policy.
    #[must_use]
    pub fn with_restart(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }

    /// Enable or disable the manifest.
    #[must_use]
    pub fn with_manifest(mut self, write: bool) -> Self {
        self.write_manifest = write;
        self
    }

    /// Resolve the directory chapters are written to for `input`.
    #[must_use]
    pub fn resolve_output_dir(&self, input: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
