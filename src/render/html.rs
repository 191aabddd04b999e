//! HTML output: a standalone document with Tailwind utility classes.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::cell::Cell;
use crate::page::{Page, classes};
use crate::schedule::GridTemplate;

use super::RenderError;

/// Tailwind Play CDN; resolves arbitrary values like `text-[8px]` in the browser.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
{%- if tailwind_cdn %}
<script src="{{ cdn }}"></script>
{%- endif %}
</head>
<body>
<div class="{{ shell.root }}">
  <header class="{{ shell.header }}">
    <div class="{{ shell.header_inner }}">
      <h1 class="{{ shell.title }}">{{ title }}</h1>
      <p class="{{ shell.subtitle }}">{{ subtitle }}</p>
    </div>
  </header>
  <main class="{{ shell.main }}">
    <div class="{{ wrapper_class }}">
      <div class="{{ grid_class }}">
{%- for cell in cells %}
        {% include "cell.html" %}
{%- endfor %}
      </div>
    </div>
  </main>
</div>
</body>
</html>
"#;

const CELL_TEMPLATE: &str =
    r#"<div class="{{ cell.class }}"{% if cell.style %} style="{{ cell.style }}"{% endif %}>{{ cell.text }}</div>"#;

#[derive(Serialize)]
struct ShellView {
    root: &'static str,
    header: &'static str,
    header_inner: &'static str,
    title: &'static str,
    subtitle: &'static str,
    main: &'static str,
}

const SHELL: ShellView = ShellView {
    root: classes::ROOT,
    header: classes::HEADER,
    header_inner: classes::HEADER_INNER,
    title: classes::TITLE,
    subtitle: classes::SUBTITLE,
    main: classes::MAIN,
};

#[derive(Serialize)]
struct CellView<'a> {
    class: String,
    style: Option<String>,
    text: &'a str,
}

impl<'a> CellView<'a> {
    fn from_cell(cell: &'a Cell) -> Self {
        CellView {
            class: cell.class_list(),
            style: cell.span_style(),
            text: cell.text(),
        }
    }
}

fn environment() -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)?;
    env.add_template("cell.html", CELL_TEMPLATE)?;
    Ok(env)
}

/// Render a single cell as a `<div>`.
pub fn render_cell(cell: &Cell) -> Result<String, RenderError> {
    let env = environment()?;
    let html = env
        .get_template("cell.html")?
        .render(context! { cell => CellView::from_cell(cell) })?;
    Ok(html)
}

/// Render the full page as an HTML document.
pub fn render_page(page: &Page, tailwind_cdn: bool) -> Result<String, RenderError> {
    let env = environment()?;
    let template: &GridTemplate = &page.schedule.template;
    let cells: Vec<CellView> = page.schedule.cells().map(CellView::from_cell).collect();

    let html = env.get_template("page.html")?.render(context! {
        title => &page.title,
        subtitle => &page.subtitle,
        tailwind_cdn,
        cdn => TAILWIND_CDN,
        shell => SHELL,
        wrapper_class => GridTemplate::WRAPPER_CLASSES,
        grid_class => template.container_classes(),
        cells,
    })?;
    Ok(html)
}
