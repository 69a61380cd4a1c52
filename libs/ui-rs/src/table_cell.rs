#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::style::{StatusColor, TD_STYLE, TH_STYLE};

#[derive(Debug, Props)]
pub struct Props<'a> {
    title: Option<&'a str>,
    children: Element<'a>,
}

pub fn TableCell<'a>(cx: Scope<'a, Props<'a>>) -> Element<'a> {
    render!(td {
        style: TD_STYLE,
        title: cx.props.title,
        &cx.props.children
    })
}

#[derive(Debug, Props)]
pub struct HeaderCellProps<'a> {
    children: Element<'a>,
}

pub fn HeaderCell<'a>(cx: Scope<'a, HeaderCellProps<'a>>) -> Element<'a> {
    render!(th {
        style: TH_STYLE,
        &cx.props.children
    })
}

#[derive(Debug, Props)]
pub struct StatusCellProps<'a> {
    status: &'a str,
    color: StatusColor,
}

/// A bold data cell whose text color reflects the status.
pub fn StatusCell<'a>(cx: Scope<'a, StatusCellProps<'a>>) -> Element<'a> {
    let color = cx.props.color.css();
    let status = cx.props.status;
    render!(td {
        style: "{TD_STYLE} color: {color}; font-weight: bold;",
        "{status}"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cell_renders_children_with_cell_style() {
        let html = dioxus_ssr::render_lazy(rsx! {
            TableCell { "1001" }
        });
        assert!(html.starts_with("<td"));
        assert!(html.contains("1001"));
        assert!(html.contains("padding: 12px"));
    }

    #[test]
    fn test_header_cell() {
        let html = dioxus_ssr::render_lazy(rsx! {
            HeaderCell { "ID Evento" }
        });
        assert!(html.starts_with("<th"));
        assert!(html.contains("ID Evento"));
        assert!(html.contains("background-color: #f8f9fa"));
    }

    #[test]
    fn test_status_cell_is_bold_and_colored() {
        let html = dioxus_ssr::render_lazy(rsx! {
            StatusCell { status: "Pendente", color: StatusColor::Orange }
        });
        assert!(html.contains("Pendente"));
        assert!(html.contains("color: orange"));
        assert!(html.contains("font-weight: bold"));
    }
}
