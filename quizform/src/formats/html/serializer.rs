//! HTML serialization
//!
//! Field markup is built as an `RcDom` subtree and serialized by html5ever, so attribute
//! values and label text are escaped by the serializer rather than by hand.
//! Pipeline for a page: FormDocument → (comrak for text, RcDom for fields) → slides →
//! forms → HTML page.

use crate::document::{Block, FormDocument, Slide};
use crate::error::FormError;
use crate::field::{ChoiceControl, Element, FieldSpec, Item};
use crate::options::{FormOptions, RenderOptions};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

pub const FIELD_CLASS: &str = "qf-field";
pub const REQUIRED_CLASS: &str = "qf-required";
pub const UNMATCHED_CLASS: &str = "qf-unmatched";
pub const LABEL_CLASS: &str = "qf-label";
pub const CHOICE_CLASS: &str = "qf-choice";
pub const CORRECT_CLASS: &str = "qf-correct";
pub const FORM_CLASS: &str = "qf-form";
pub const SLIDE_CLASS: &str = "qf-slide";

/// Options for full page serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    pub form: FormOptions,
    /// Optional custom CSS appended after the embedded stylesheet
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn new(form: FormOptions) -> Self {
        Self {
            form,
            custom_css: None,
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Render one field into its markup fragment.
///
/// The fragment is a `div` carrying the field id, a `data-code` attribute and the
/// required marker class, holding the label and the controls of the element.
pub fn render_field(
    spec: &FieldSpec,
    element: &Element,
    options: &RenderOptions,
) -> Result<String, FormError> {
    let container = build_field(spec, element, options);
    serialize_node(&container)
}

fn build_field(spec: &FieldSpec, element: &Element, options: &RenderOptions) -> Handle {
    let mut class = FIELD_CLASS.to_string();
    if spec.required {
        class.push(' ');
        class.push_str(REQUIRED_CLASS);
    }
    if *element == Element::Unmatched {
        class.push(' ');
        class.push_str(UNMATCHED_CLASS);
    }

    let container = create_element(
        "div",
        vec![
            ("id", &spec.id),
            ("class", &class),
            ("data-code", &spec.code),
        ],
    );

    match element {
        Element::Text { width } => {
            let control_id = spec.control_id();
            append(&container, label_for(&control_id, &spec.name));

            let mut attrs = vec![
                ("type", "text"),
                ("id", control_id.as_str()),
                ("name", spec.code.as_str()),
            ];
            let size;
            if let Some(width) = width {
                size = width.to_string();
                attrs.push(("size", &size));
            }
            append(&container, create_element("input", attrs));
        }

        Element::Textarea { rows } => {
            let control_id = spec.control_id();
            append(&container, label_for(&control_id, &spec.name));

            let rows = rows.to_string();
            let textarea = create_element(
                "textarea",
                vec![
                    ("id", &control_id),
                    ("name", &spec.code),
                    ("rows", &rows),
                ],
            );
            append(&container, textarea);
        }

        Element::RadioSet { items } => {
            append(&container, label_only(&spec.name));
            for item in items {
                append(&container, build_choice(spec, ChoiceControl::Radio, item));
            }
        }

        Element::CheckboxSet { items } => {
            append(&container, label_only(&spec.name));
            for item in items {
                append(&container, build_choice(spec, ChoiceControl::Checkbox, item));
            }
        }

        Element::BareList { entries } => {
            append(&container, label_only(&spec.name));
            for entry in entries {
                append(&container, build_choice(spec, entry.control, &entry.item));
            }
        }

        Element::SelectInline { items } => {
            build_select(&container, spec, items, options, false);
        }

        Element::SelectMultiline { items } => {
            build_select(&container, spec, items, options, true);
        }

        Element::Unmatched => {
            append(&container, label_only(&spec.name));
        }
    }

    container
}

/// One radio or checkbox with its label, wrapped so the correct marker can style both.
fn build_choice(spec: &FieldSpec, control: ChoiceControl, item: &Item) -> Handle {
    let id = spec.item_id(&item.value);
    let name = control.submission_name(&spec.code);
    let class = if item.correct {
        format!("{CHOICE_CLASS} {CORRECT_CLASS}")
    } else {
        CHOICE_CLASS.to_string()
    };

    let wrapper = create_element("span", vec![("class", &class)]);

    let mut attrs = vec![
        ("type", control.input_type()),
        ("id", id.as_str()),
        ("name", name.as_str()),
        ("value", item.value.as_str()),
    ];
    if item.selected {
        attrs.push(("checked", ""));
    }
    append(&wrapper, create_element("input", attrs));

    let label = create_element("label", vec![("for", &id)]);
    append(&label, create_text(&item.label));
    append(&wrapper, label);

    wrapper
}

/// A select opened by a disabled, empty placeholder option.
///
/// Inline selects only know "selected". Multiline selects additionally mark correct
/// options with the correct class.
fn build_select(
    container: &Handle,
    spec: &FieldSpec,
    items: &[Item],
    options: &RenderOptions,
    mark_correct: bool,
) {
    let control_id = spec.control_id();
    append(container, label_for(&control_id, &spec.name));

    let select = create_element("select", vec![("id", &control_id), ("name", &spec.code)]);

    let mut placeholder_attrs = vec![("value", ""), ("disabled", "")];
    if !items.iter().any(|item| item.selected) {
        placeholder_attrs.push(("selected", ""));
    }
    let placeholder = create_element("option", placeholder_attrs);
    if !options.placeholder_label.is_empty() {
        append(&placeholder, create_text(&options.placeholder_label));
    }
    append(&select, placeholder);

    for item in items {
        let mut attrs = vec![("value", item.value.as_str())];
        if item.selected {
            attrs.push(("selected", ""));
        }
        if mark_correct && item.correct {
            attrs.push(("class", CORRECT_CLASS));
        }
        let option = create_element("option", attrs);
        append(&option, create_text(&item.label));
        append(&select, option);
    }

    append(container, select);
}

fn label_for(control_id: &str, name: &str) -> Handle {
    let label = create_element("label", vec![("class", LABEL_CLASS), ("for", control_id)]);
    append(&label, create_text(name));
    label
}

fn label_only(name: &str) -> Handle {
    let label = create_element("span", vec![("class", LABEL_CLASS)]);
    append(&label, create_text(name));
    label
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize a node and its subtree to an HTML string
fn serialize_node(node: &Handle) -> Result<String, FormError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| FormError::Serialization(format!("HTML serialization failed: {e}")))?;

    String::from_utf8(output)
        .map_err(|e| FormError::Serialization(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap slide content in its `<form>` container.
pub fn wrap_form(namespace: &str, body: &str, form: &FormOptions) -> String {
    let mut html = format!(
        "<form id=\"{}\" class=\"{FORM_CLASS}\" method=\"{}\"",
        html_escape(namespace),
        html_escape(&form.method)
    );
    if !form.action.is_empty() {
        html.push_str(&format!(" action=\"{}\"", html_escape(&form.action)));
    }
    html.push_str(">\n");
    html.push_str(body);
    if !form.submit_label.is_empty() {
        html.push_str(&format!(
            "<button type=\"submit\">{}</button>\n",
            html_escape(&form.submit_label)
        ));
    }
    html.push_str("</form>\n");
    html
}

/// Serialize a compiled document into a standalone HTML page
pub fn serialize_to_html(doc: &FormDocument, options: &HtmlOptions) -> Result<String, FormError> {
    let mut body = String::new();
    for slide in &doc.slides {
        body.push_str(&serialize_slide(slide, &options.form));
    }
    Ok(wrap_in_document(&body, &doc.title, options))
}

/// One slide: passthrough text rendered as Markdown, fields inserted in source order,
/// and the whole slide wrapped in a form when it has fields.
pub fn serialize_slide(slide: &Slide, form: &FormOptions) -> String {
    let mut content = String::new();
    let mut pending = Vec::new();

    for block in &slide.blocks {
        match block {
            Block::Text(text) => pending.push(text.as_str()),
            Block::Field(fragment) => {
                flush_markdown(&mut content, &mut pending);
                content.push_str(&fragment.markup);
                content.push('\n');
            }
        }
    }
    flush_markdown(&mut content, &mut pending);

    let inner = if slide.has_fields() {
        wrap_form(&slide.namespace, &content, form)
    } else {
        content
    };
    format!(
        "<section class=\"{SLIDE_CLASS}\" data-slide=\"{}\">\n{inner}</section>\n",
        html_escape(&slide.namespace)
    )
}

fn flush_markdown(content: &mut String, pending: &mut Vec<&str>) {
    if pending.is_empty() {
        return;
    }
    let markdown = pending.join("\n\n");
    content.push_str(&comrak::markdown_to_html(
        &markdown,
        &comrak::Options::default(),
    ));
    pending.clear();
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let baseline_css = crate::formats::get_default_css();
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="quizform">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body>
<div class="qf-document">
{body_html}</div>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
