// src/presentation/http/templates.rs
//
// Templates are embedded at compile time so rendering never depends on the
// process working directory.
use crate::application::error::{ApplicationError, ApplicationResult};
use once_cell::sync::Lazy;
use tera::{Context, Tera};

static ENGINE: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("index.html", include_str!("../../../templates/index.html")),
        ("detail.html", include_str!("../../../templates/detail.html")),
        ("results.html", include_str!("../../../templates/results.html")),
    ])
    .expect("embedded templates must parse");
    tera
});

pub fn render(name: &str, context: &Context) -> ApplicationResult<String> {
    ENGINE.render(name, context).map_err(|err| {
        ApplicationError::infrastructure(format!("failed to render {name}: {err}"))
    })
}
