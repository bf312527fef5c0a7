//! End-to-end tests: build a .docx, split it, read the chapters back.

mod common;

use std::fs;

use chapter_splitter::{split_word, SplitOptions, SplitterError, WordDocument};
use common::{block_texts, DocxBuilder, CHAPTER_NUMBERING};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn thesis() -> DocxBuilder {
    DocxBuilder::new()
        .styled("Title", "毕业论文")
        .paragraph("作者")
        .centered("第一章 绪论")
        .paragraph("研究背景")
        .styled("ChapterTitle", "第二章 方法")
        .paragraph("实验设计")
        .table("参数")
        .centered("第三章 结果")
        .paragraph("结论")
}

#[test]
fn test_split_front_matter_and_three_chapters() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("thesis.docx");
    thesis().write(&input);

    let map = split_word(&input, &SplitOptions::default()).unwrap();

    let keys: Vec<&str> = map.entries().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        vec!["chapter1", "chapter2", "chapter3", "chapter4", "fulltext"]
    );
    assert_eq!(map.get("fulltext"), Some(input.as_path()));
    assert_eq!(map.get("chapter1"), Some(dir.path().join("封面.docx").as_path()));
    assert_eq!(
        map.get("chapter3"),
        Some(dir.path().join("第二章 方法.docx").as_path())
    );

    assert_eq!(
        block_texts(&dir.path().join("封面.docx")),
        vec!["毕业论文", "作者"]
    );
    assert_eq!(
        block_texts(&dir.path().join("第一章 绪论.docx")),
        vec!["第一章 绪论", "研究背景"]
    );
    assert_eq!(
        block_texts(&dir.path().join("第二章 方法.docx")),
        vec!["第二章 方法", "实验设计", "[table]"]
    );
    assert_eq!(
        block_texts(&dir.path().join("第三章 结果.docx")),
        vec!["第三章 结果", "结论"]
    );

    let ordinals: Vec<Option<u32>> = map.chapters.iter().map(|record| record.ordinal).collect();
    assert_eq!(ordinals, vec![None, Some(1), Some(2), Some(3)]);
    assert!(dir.path().join("chapters.yaml").exists());
}

#[test]
fn test_every_block_lands_in_exactly_one_chapter() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("thesis.docx");
    thesis().write(&input);

    let map = split_word(&input, &SplitOptions::default()).unwrap();

    let rejoined: Vec<String> = map
        .chapters
        .iter()
        .flat_map(|record| block_texts(&record.path))
        .collect();
    assert_eq!(rejoined, block_texts(&input));
}

#[test]
fn test_chapter_keeps_section_properties_and_other_parts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("thesis.docx");
    thesis().numbering(CHAPTER_NUMBERING).write(&input);

    split_word(&input, &SplitOptions::default().with_manifest(false)).unwrap();

    let chapter = WordDocument::open(&dir.path().join("第三章 结果.docx")).unwrap();
    assert_eq!(chapter.numbering().len(), 2);
    assert!(chapter.styles().is_centered(Some("ChapterTitle")));

    let file = fs::File::open(dir.path().join("第三章 结果.docx")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    std::io::Read::read_to_string(&mut archive.by_name("word/document.xml").unwrap(), &mut xml)
        .unwrap();
    assert!(xml.contains("<w:sectPr><w:pgSz"));
    assert!(!xml.contains("研究背景"));
    assert!(!dir.path().join("chapters.yaml").exists());
}

#[test]
fn test_table_of_contents_does_not_split() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("report.docx");
    DocxBuilder::new()
        .centered("目录")
        .centered("第一章 绪论\t1")
        .centered("第二章 方法\t4")
        .centered("第一章 绪论")
        .paragraph("正文")
        .paragraph("如第一章所述")
        .centered("第二章 方法")
        .write(&input);

    let map = split_word(&input, &SplitOptions::default()).unwrap();

    assert_eq!(map.chapters.len(), 3);
    assert_eq!(
        block_texts(&map.chapters[0].path),
        vec!["目录", "第一章 绪论\t1", "第二章 方法\t4"]
    );
    assert_eq!(
        block_texts(&map.chapters[1].path),
        vec!["第一章 绪论", "正文", "如第一章所述"]
    );
}

#[test]
fn test_repeated_ordinal_is_not_a_boundary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("book.docx");
    DocxBuilder::new()
        .centered("第一章")
        .centered("第二章")
        .centered("第一章 回顾")
        .centered("第三章")
        .write(&input);

    let map = split_word(&input, &SplitOptions::default()).unwrap();

    let ordinals: Vec<Option<u32>> = map.chapters.iter().map(|record| record.ordinal).collect();
    assert_eq!(ordinals, vec![None, Some(1), Some(2), Some(3)]);
    assert_eq!(block_texts(&map.chapters[0].path), Vec::<String>::new());
    assert_eq!(
        block_texts(&map.chapters[2].path),
        vec!["第二章", "第一章 回顾"]
    );
}

#[test]
fn test_heading_after_page_break_names_file_cleanly() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("book.docx");
    DocxBuilder::new()
        .paragraph("封面")
        .after_page_break("第一章 绪论")
        .paragraph("正文")
        .write(&input);

    let map = split_word(&input, &SplitOptions::default()).unwrap();

    assert_eq!(map.chapters.len(), 2);
    assert_eq!(map.chapters[1].title.as_deref(), Some("第一章 绪论"));
    assert_eq!(map.chapters[1].path, dir.path().join("第一章 绪论.docx"));
    assert_eq!(
        block_texts(&map.chapters[1].path),
        vec!["第一章 绪论", "正文"]
    );
}

#[test]
fn test_long_heading_is_not_a_boundary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("book.docx");
    let long = format!("第一章 {}", "很".repeat(30));
    DocxBuilder::new()
        .paragraph("封面")
        .centered(&long)
        .write(&input);

    let map = split_word(&input, &SplitOptions::default()).unwrap();
    assert_eq!(map.chapters.len(), 1);
    assert_eq!(map.chapters[0].path, dir.path().join("封面.docx"));
}

#[test]
fn test_headings_from_list_numbering() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("numbered.docx");
    DocxBuilder::new()
        .numbering(CHAPTER_NUMBERING)
        .paragraph("摘要")
        .numbered(1, 0, "绪论")
        .numbered(1, 1, "背景")
        .paragraph("正文")
        .numbered(1, 0, "方法")
        .write(&input);

    let out = TempDir::new().unwrap();
    let options = SplitOptions::default().with_output_dir(out.path());
    let map = split_word(&input, &options).unwrap();

    assert_eq!(map.chapters.len(), 3);
    assert_eq!(map.chapters[1].ordinal, Some(1));
    assert_eq!(map.chapters[1].path, out.path().join("绪论.docx"));
    assert_eq!(map.chapters[2].path, out.path().join("方法.docx"));
    assert_eq!(block_texts(&map.chapters[2].path), vec!["方法"]);
    assert!(out.path().join("chapters.yaml").exists());
}

#[test]
fn test_no_headings_gives_front_matter_only() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("memo.docx");
    DocxBuilder::new()
        .paragraph("一")
        .paragraph("二")
        .write(&input);

    let map = split_word(&input, &SplitOptions::default()).unwrap();

    assert_eq!(map.chapters.len(), 1);
    assert_eq!(block_texts(&map.chapters[0].path), vec!["一", "二"]);
}

#[test]
fn test_dangling_numbering_reference_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.docx");
    DocxBuilder::new()
        .numbering(CHAPTER_NUMBERING)
        .numbered(1, 5, "深层")
        .write(&input);

    let err = split_word(&input, &SplitOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        SplitterError::NumberingLookup {
            list_id: 1,
            level: 5
        }
    ));
    assert!(err.to_string().contains("list 1 at level 5"));
}

#[test]
fn test_malformed_numbering_degrades_to_plain_text() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("degraded.docx");
    DocxBuilder::new()
        .numbering("<w:numbering")
        .numbered(1, 0, "绪论")
        .centered("第一章 方法")
        .write(&input);

    let document = WordDocument::open(&input).unwrap();
    assert!(document.numbering().is_empty());

    let map = split_word(&input, &SplitOptions::default()).unwrap();
    assert_eq!(map.chapters.len(), 2);
    assert_eq!(block_texts(&map.chapters[0].path), vec!["绪论"]);
}

#[test]
fn test_numbered_texts_lists_every_paragraph() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("numbered.docx");
    DocxBuilder::new()
        .numbering(CHAPTER_NUMBERING)
        .numbered(1, 0, "绪论")
        .numbered(1, 1, "背景")
        .numbered(1, 1, "目标")
        .paragraph("正文")
        .numbered(1, 0, "方法")
        .numbered(1, 1, "数据")
        .write(&input);

    let document = WordDocument::open(&input).unwrap();
    let texts = document
        .numbered_texts(chapter_splitter::RestartPolicy::Never)
        .unwrap();
    assert_eq!(
        texts,
        vec!["第一章\t绪论", "一.1 背景", "一.2 目标", "正文", "第二章\t方法", "二.3 数据"]
    );

    let restarted = document
        .numbered_texts(chapter_splitter::RestartPolicy::OnShallowerAdvance)
        .unwrap();
    assert_eq!(restarted[5], "二.1 数据");
}

#[test]
fn test_input_that_is_not_a_docx() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.docx");
    fs::write(&input, "plain text").unwrap();

    let err = split_word(&input, &SplitOptions::default()).unwrap_err();
    assert!(matches!(err, SplitterError::InvalidDocx(_)));
}
