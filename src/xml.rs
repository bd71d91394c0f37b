//! XML element adapter: thin helpers over the roxmltree DOM.
//!
//! The rest of the crate navigates sitemap documents exclusively through
//! these functions, so the underlying XML library's API never leaks into
//! record or collection code.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// Sitemaps commonly declare the `http://www.sitemaps.org/schemas/sitemap/0.9`
/// namespace; all classification and field lookups are done on local names.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use sitemap_parser::xml::get_tag_name;
///
/// let xml = r#"<ns:urlset xmlns:ns="http://example.com"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "urlset");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get all element children of a node.
///
/// Excludes text nodes, comments, and processing instructions.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the trimmed text content of a node.
///
/// Whitespace-only content counts as absent: the sitemap protocol gives no
/// meaning to an element that is present but blank.
pub fn text_content(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
