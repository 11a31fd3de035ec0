//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use roppou_resolver::xml::get_tag_name;
///
/// let xml = r#"<Law><Article Num="1"/></Law>"#;
/// let doc = Document::parse(xml).unwrap();
/// let article = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(article), "Article");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// All descendant elements (including `node` itself) with the given tag, in
/// document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use roppou_resolver::xml::descendants_with_tag;
///
/// let xml = r#"<Law><Chapter><Article Num="1"/></Chapter><Article Num="2"/></Law>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let nums: Vec<_> = descendants_with_tag(doc.root_element(), "Article")
///     .filter_map(|n| n.attribute("Num"))
///     .collect();
/// assert_eq!(nums, vec!["1", "2"]);
/// ```
pub fn descendants_with_tag<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants().filter(move |n| has_tag(*n, tag))
}

/// First descendant element with the given tag, in document order.
pub fn first_descendant<'a, 'input>(node: Node<'a, 'input>, tag: &'a str) -> Option<Node<'a, 'input>> {
    descendants_with_tag(node, tag).next()
}

/// Concatenated text of a node and all its descendants, trimmed.
///
/// Inline markup such as `<Ruby>` is flattened into its text.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use roppou_resolver::xml::collect_text;
///
/// let xml = "<Sentence>集会、<Ruby>結社<Rt>けっしゃ</Rt></Ruby>の自由</Sentence>";
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(collect_text(doc.root_element()), "集会、結社けっしゃの自由");
/// ```
pub fn collect_text(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}
