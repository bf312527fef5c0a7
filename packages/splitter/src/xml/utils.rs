//! Helpers for navigating WordprocessingML DOM trees.

use roxmltree::Node;

use crate::config::{MC_NS, WML_NS};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use chapter_splitter::xml::get_tag_name;
///
/// let xml = r#"<w:body xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "body");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is a `w:` element with the given local name.
pub fn is_wml(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().namespace() == Some(WML_NS) && get_tag_name(node) == tag
}

/// Check if a node is an `mc:` element with the given local name.
pub fn is_mc(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().namespace() == Some(MC_NS) && get_tag_name(node) == tag
}

/// Find the first `w:` child element with the given local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use chapter_splitter::xml::find_child;
///
/// let xml = r#"<w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:pPr/></w:p>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert!(find_child(doc.root_element(), "pPr").is_some());
/// assert!(find_child(doc.root_element(), "r").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_wml(*child, tag))
}

/// Find all `w:` child elements with the given local name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| is_wml(*child, tag))
}

/// Find a descendant `w:` element matching a slash-separated path.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use chapter_splitter::xml::find_by_path;
///
/// let xml = r#"<w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///     <w:pPr><w:numPr><w:numId w:val="3"/></w:numPr></w:pPr>
/// </w:p>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert!(find_by_path(doc.root_element(), "pPr/numPr/numId").is_some());
/// assert!(find_by_path(doc.root_element(), "pPr/jc").is_none());
/// ```
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let mut current = node;

    for part in path.split('/') {
        current = find_child(current, part)?;
    }

    Some(current)
}

/// Get a `w:`-qualified attribute.
pub fn wml_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute((WML_NS, name))
}

/// Get the `w:val` attribute of a `w:` child element.
///
/// Most WordprocessingML properties are stored this way
/// (`<w:jc w:val="center"/>`, `<w:numFmt w:val="decimal"/>`).
pub fn child_val<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    find_child(node, tag).and_then(|child| wml_attribute(child, "val"))
}

/// Parse the `w:val` attribute of a `w:` child element as an integer.
pub fn child_val_u32(node: Node<'_, '_>, tag: &str) -> Option<u32> {
    child_val(node, tag).and_then(|v| v.trim().parse().ok())
}

/// Get all element children of a node.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
