use std::io::{Cursor, Write};

use xmltree::{Element, EmitterConfig, XMLNode};

use super::args::ArgumentDescriptor;
use super::descriptor::{DescriptorValue, PluginDescriptor};
use crate::utils::error::AppResult;

pub const ROOT_ELEMENT: &str = "plugin_info";
pub const ARG_ELEMENT: &str = "arg";

fn text_element(name: &str, text: Option<&str>) -> Element {
    let mut el = Element::new(name);
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        el.children.push(XMLNode::Text(text.to_string()));
    }
    el
}

fn arg_element(arg: &ArgumentDescriptor) -> Element {
    let mut arg_el = Element::new(ARG_ELEMENT);
    let mut fields = vec![
        ("name", arg.name.as_str()),
        ("switch", arg.switch.as_str()),
        ("multiple", arg.multiple_flag()),
    ];
    if let Some(argtype) = arg.argtype {
        fields.push(("argtype", argtype));
    }
    for (key, value) in fields {
        arg_el
            .children
            .push(XMLNode::Element(text_element(key, Some(value))));
    }
    arg_el
}

/// Convert a descriptor into a `<plugin_info>` tree.
pub fn plugin_to_xml(plugin: &PluginDescriptor) -> Element {
    let mut root = Element::new(ROOT_ELEMENT);

    for (key, value) in plugin.entries() {
        let el = match value {
            DescriptorValue::Args(args) => {
                let mut list_el = Element::new(key);
                for arg in args {
                    list_el.children.push(XMLNode::Element(arg_element(arg)));
                }
                list_el
            }
            DescriptorValue::Text(text) => text_element(key, text),
        };
        root.children.push(XMLNode::Element(el));
    }

    root
}

/// Write an indented document, XML declaration included.
pub fn write_plugin_xml<W: Write>(element: &Element, writer: W) -> AppResult<()> {
    let config = EmitterConfig::new()
        .perform_indent(true)
        .indent_string("  ");
    element.write_with_config(writer, config)?;
    Ok(())
}

pub fn plugin_xml_string(element: &Element) -> AppResult<String> {
    let mut buf = Vec::new();
    write_plugin_xml(element, Cursor::new(&mut buf))?;
    Ok(String::from_utf8(buf)?)
}
