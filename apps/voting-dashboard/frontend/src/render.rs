//! Static HTML rendering of the dashboard.

use dioxus::prelude::VirtualDom;

use crate::{
    load::LoadState,
    pages::{DashboardView, DashboardViewProps},
};

/// Renders the dashboard in `state` as a standalone HTML document.
pub fn render_document(state: LoadState) -> String {
    let mut dom = VirtualDom::new_with_props(DashboardView, DashboardViewProps { state });
    let _ = dom.rebuild();
    let body = dioxus_ssr::render(&dom);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Sistema de Votação</title>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}
