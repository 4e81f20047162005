//! Template engine for rendering the documentation page.

use minijinja::{context, Environment, HtmlEscape, Value};

use crate::render::Document;

/// Name of the page template. The `.html` suffix turns on autoescaping.
pub const DOCUMENT_TEMPLATE_NAME: &str = "document.html";

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the document template loaded.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        env.add_filter("display_html", display_html);
        env.add_template_owned(
            DOCUMENT_TEMPLATE_NAME.to_string(),
            DOCUMENT_TEMPLATE.to_string(),
        )?;

        Ok(Self { env })
    }

    /// Render the documentation page.
    pub fn render_document(&self, doc: &Document<'_>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(DOCUMENT_TEMPLATE_NAME)?;

        tmpl.render(context! {
            title => doc.title,
            links => doc.links,
            functions => doc.functions,
        })
    }
}

/// Escape text whose line breaks and tabs were already turned into
/// `<br>` and `&nbsp;`, keeping those two markers intact.
fn display_html(text: &str) -> Value {
    let escaped = HtmlEscape(text)
        .to_string()
        .replace("&lt;br&gt;", "<br>")
        .replace("&amp;nbsp;", "&nbsp;");
    Value::from_safe_string(escaped)
}

const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - Documentation</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-GLhlTQ8iRABdZLl6O3oVMWSktQOp6b7In1Zl3/Jr59b6EGGoI1aFkw7cmDA6j6gD" crossorigin="anonymous">
</head>
<body class="bg-secondary">
  <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/js/bootstrap.bundle.min.js" integrity="sha384-w76AqPfDkMBDXo30jS1Sgez6pr3x5MlQ1ZAGC+nuZB+EYdgRZgiwxhTBTkF7CXvN" crossorigin="anonymous"></script>
  <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
    <div class="container" id="top">
      <span class="navbar-text">
        <h3 class="display-5">{{ title }} - Documentation</h3>
      </span>
    </div>
  </nav>
  <div class="container bg-light">
  <div class="row">
    <div class="col-3">
      <div class="container sticky-top">
        <br>
        <h5>Functions List</h5>
        <div class="card">
          <ul class="list-group list-group-flush">
          {% for function in functions %}
            {% if links %}
            <a href="#{{ function.name }}" style="text-decoration: none; color: black;"><li class="list-group-item">{{ function.name }}</li></a>
            {% else %}
            <li class="list-group-item">{{ function.name }}</li>
            {% endif %}
          {% endfor %}
          </ul>
        </div>
      </div>
    </div>
    <div class="col">
      <h5 class="display-6">Functions</h5>
      {% for function in functions %}
      <div id="{{ function.name }}">
        <p class="h3">{{ function.name }}</p>
        <div class="card">
          <div class="card-header"><i><b>{{ function.signature_text }}</b></i></div>
          <div class="container">
            {% if function.short_description is not none %}
            <p class="card-title">{{ function.short_description }}</p>
            {% endif %}
            {% if function.long_description is not none %}
            <p class="card-text">{{ function.long_description | display_html }}</p>
            {% endif %}
            <b>Args:</b>
            <ul class="list-group list-group-flush">
            {% if function.parameters %}
              {% for param in function.parameters %}
              <li class="list-group-item"><i>{{ param.name }}</i>: {{ param.description }}{% if param.type is not none %} ({{ param.type }}){% endif %}</li>
              {% endfor %}
            {% else %}
              <li class="list-group-item"><i>None</i></li>
            {% endif %}
            </ul>
            {% if function.return_doc is not none %}
            <b>{% if function.return_doc.is_generator %}Yields:{% else %}Returns:{% endif %}</b>
            <ul class="list-group list-group-flush">
              <li class="list-group-item">{% if function.return_doc.name is not none %}<i>{{ function.return_doc.name }}</i> {% endif %}{% if function.return_doc.type is not none %}({{ function.return_doc.type }}) {% endif %}{{ function.return_doc.description | display_html }}</li>
            </ul>
            {% else %}
            <b>Returns:</b>
            <ul class="list-group list-group-flush">
              <li class="list-group-item">None</li>
            </ul>
            {% endif %}
            {% if function.raised_errors %}
            <b>Raises:</b>
            <ul class="list-group list-group-flush">
              {% for error in function.raised_errors %}
              <li class="list-group-item"><i>{{ error.type }}</i>: {{ error.description | display_html }}</li>
              {% endfor %}
            </ul>
            {% endif %}
            {% if function.examples %}
            <b>Examples:</b>
            <ul class="list-group list-group-flush">
              {% for example in function.examples %}
              <li class="list-group-item">
                <div class="card">
                  <div class="card-header">{{ example.description | display_html }}</div>
                </div>
              </li>
              {% endfor %}
            </ul>
            {% endif %}
          </div>
        </div>
      </div>
      <br>
      {% endfor %}
      <br>
    </div>
  </div>
  </div>
  <br>
  <br>
  <nav class="navbar navbar-light bg-dark">
  </nav>
</body>
</html>
"##;
