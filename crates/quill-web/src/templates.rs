//! HTML rendering via minijinja, with the page sources embedded at compile
//! time so the binary is self-contained.

use minijinja::{Environment, Value};

pub struct Templates {
  env: Environment<'static>,
}

impl Templates {
  pub fn new() -> Self {
    let mut env = Environment::new();
    env.set_loader(embedded_loader);
    Self { env }
  }

  pub fn render(
    &self,
    name: &str,
    context: Value,
  ) -> Result<String, minijinja::Error> {
    self.env.get_template(name)?.render(context)
  }
}

impl Default for Templates {
  fn default() -> Self {
    Self::new()
  }
}

fn embedded_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
  let source = match name {
    "base.html"      => Some(include_str!("templates/base.html")),
    "index.html"     => Some(include_str!("templates/index.html")),
    "post.html"      => Some(include_str!("templates/post.html")),
    "about.html"     => Some(include_str!("templates/about.html")),
    "dashboard.html" => Some(include_str!("templates/dashboard.html")),
    "edit.html"      => Some(include_str!("templates/edit.html")),
    _ => None,
  };
  Ok(source.map(str::to_string))
}
