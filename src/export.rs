//! Page export: (format, theme) → String.
//!
//! Pure functions, no I/O. The HTML rendition is the page as a browser
//! would host it: head metadata, sticky header, six anchored sections with
//! one-shot reveal, the inert contact form, footer.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use unicode_width::UnicodeWidthStr;

use crate::content::{Block, Bullet, FormMarkup, ImageRef, InputKind, PAGE, Section, SectionId};
use crate::dark_mode::ThemeController;
use crate::error::Result;
use crate::palette::{DARK, LIGHT, Palette};
use crate::reveal::{HIDDEN_TILT_DEG, REVEAL_DURATION};

/// Output format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Standalone HTML document.
    #[default]
    Html,
    /// Plain text, headings underlined.
    Text,
    /// The content model as JSON.
    Json,
}

/// Render the page in the requested format.
///
/// The theme only affects HTML, where it sets the initial root class.
pub fn render_page(format: ExportFormat, theme: &ThemeController) -> Result<String> {
    match format {
        ExportFormat::Html => Ok(render_html(theme)),
        ExportFormat::Text => Ok(render_text()),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&PAGE)?),
    }
}

/// Render the page and write it to `path`, creating parent directories.
///
/// Returns the number of bytes written.
pub fn write_page(path: &Path, format: ExportFormat, theme: &ThemeController) -> Result<u64> {
    let rendered = render_page(format, theme)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &rendered)?;
    log::info!("exported {:?} page to {}", format, path.display());
    Ok(rendered.len() as u64)
}

// ============================================================================
// HTML
// ============================================================================

/// Minimal HTML escaping for text and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_html(theme: &ThemeController) -> String {
    let meta = &PAGE.meta;
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    let class = theme.root().class_attr();
    if class.is_empty() {
        out.push_str("<html lang=\"en\">\n");
    } else {
        let _ = writeln!(out, "<html lang=\"en\" class=\"{}\">", escape_html(&class));
    }

    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(meta.title));
    let _ = writeln!(
        out,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(meta.description)
    );
    let _ = writeln!(out, "<meta name=\"viewport\" content=\"{}\">", escape_html(meta.viewport));
    let _ = writeln!(out, "<style>\n{}</style>", stylesheet());
    out.push_str("</head>\n<body>\n");

    // Header
    out.push_str("<header class=\"site-header\">\n");
    let _ = writeln!(out, "  <h1>{}</h1>", escape_html(PAGE.brand));
    out.push_str("  <nav>\n");
    for id in SectionId::ALL {
        let _ = writeln!(
            out,
            "    <button type=\"button\" data-scroll-to=\"{}\">{}</button>",
            id.as_str(),
            id.nav_label()
        );
    }
    out.push_str("  </nav>\n");
    let _ = writeln!(
        out,
        "  <button type=\"button\" id=\"theme-toggle\">{}</button>",
        theme.toggle_label()
    );
    out.push_str("</header>\n");

    // Sections; contact sits after <main>.
    out.push_str("<main>\n");
    for section in PAGE.sections {
        if section.id == SectionId::Contact {
            out.push_str("</main>\n");
        }
        html_section(&mut out, section);
    }

    let _ = writeln!(
        out,
        "<footer class=\"site-footer\"><p>{}</p></footer>",
        escape_html(PAGE.footer)
    );
    let _ = writeln!(out, "<script>\n{}</script>", SCRIPT);
    out.push_str("</body>\n</html>\n");
    out
}

fn html_section(out: &mut String, section: &Section) {
    let _ = writeln!(
        out,
        "<section id=\"{}\" data-reveal=\"hidden\">",
        section.id.as_str()
    );
    for block in section.blocks {
        match block {
            Block::Image(image) => html_image(out, image),
            Block::Title(text) => {
                let _ = writeln!(out, "  <h1 class=\"title\">{}</h1>", escape_html(text));
            }
            Block::Heading(text) => {
                let _ = writeln!(out, "  <h1>{}</h1>", escape_html(text));
            }
            Block::Paragraph(text) => {
                let _ = writeln!(out, "  <p>{}</p>", escape_html(text));
            }
            Block::Bullets(items) => {
                out.push_str("  <ul>\n");
                for item in *items {
                    html_bullet(out, item);
                }
                out.push_str("  </ul>\n");
            }
            Block::Form(form) => html_form(out, form),
        }
    }
    out.push_str("</section>\n");
}

fn html_image(out: &mut String, image: &ImageRef) {
    let _ = writeln!(
        out,
        "  <img class=\"profile\" src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">",
        escape_html(image.src),
        escape_html(image.alt),
        image.width,
        image.height
    );
}

fn html_bullet(out: &mut String, item: &Bullet) {
    out.push_str("    <li>");
    if let Some(strong) = item.strong {
        let _ = write!(out, "<strong>{}</strong>", escape_html(strong));
    }
    out.push_str(&escape_html(item.text));
    if let Some(detail) = item.detail {
        let _ = write!(out, "<p>{}</p>", escape_html(detail));
    }
    out.push_str("</li>\n");
}

fn html_form(out: &mut String, form: &FormMarkup) {
    out.push_str("  <form>\n");
    for field in form.fields {
        let placeholder = escape_html(field.placeholder);
        match field.kind {
            InputKind::Text => {
                let _ = writeln!(out, "    <input type=\"text\" placeholder=\"{}\">", placeholder);
            }
            InputKind::Email => {
                let _ = writeln!(out, "    <input type=\"email\" placeholder=\"{}\">", placeholder);
            }
            InputKind::TextArea => {
                let _ = writeln!(out, "    <textarea placeholder=\"{}\"></textarea>", placeholder);
            }
        }
    }
    let _ = writeln!(
        out,
        "    <button type=\"submit\">{}</button>",
        escape_html(form.submit_label)
    );
    out.push_str("  </form>\n");
}

/// Palette variables for one mode.
fn palette_vars(palette: &Palette) -> String {
    let mut vars = String::new();
    let _ = write!(
        vars,
        "--header-bg:{};--text:{};--title:{};--toggle-bg:{};--toggle-fg:{};--footer-bg:{};\
         --input-bg:{};--input-fg:{};--placeholder:{};--focus:{};--submit-bg:{};--submit-fg:{};",
        palette.header_bg.hex(),
        palette.text.hex(),
        palette.title.hex(),
        palette.toggle_bg.hex(),
        palette.toggle_fg.hex(),
        palette.footer_bg.hex(),
        palette.input_bg.hex(),
        palette.input_fg.hex(),
        palette.placeholder.hex(),
        palette.focus_ring.hex(),
        palette.submit_bg.hex(),
        palette.submit_fg.hex(),
    );
    for id in SectionId::ALL {
        let _ = write!(vars, "--bg-{}:{};", id.as_str(), palette.section_bg(id).hex());
    }
    vars
}

fn stylesheet() -> String {
    let mut css = String::new();
    let _ = writeln!(css, ":root{{{}}}", palette_vars(&LIGHT));
    let _ = writeln!(css, ":root.dark{{{}}}", palette_vars(&DARK));
    css.push_str(BASE_CSS);
    for id in SectionId::ALL {
        let _ = writeln!(css, "#{0}{{background:var(--bg-{0});}}", id.as_str());
    }
    let _ = writeln!(
        css,
        "[data-reveal=hidden]{{opacity:0;transform:perspective(1200px) translateY(50px) rotateX({}deg);}}",
        HIDDEN_TILT_DEG
    );
    let _ = writeln!(
        css,
        "[data-reveal]{{transition:opacity {0}s ease,transform {0}s ease;}}",
        REVEAL_DURATION.as_secs_f32()
    );
    css
}

const BASE_CSS: &str = "\
html{scroll-behavior:smooth;}
body{margin:0;font-family:system-ui,sans-serif;color:var(--text);}
.site-header{position:sticky;top:0;z-index:50;display:flex;justify-content:space-between;align-items:center;padding:1.5rem;background:var(--header-bg);box-shadow:0 10px 15px -3px rgba(0,0,0,.1);}
.site-header h1{font-size:1.875rem;margin:0;}
.site-header nav button{margin:0 1rem;background:none;border:0;color:inherit;font:inherit;cursor:pointer;}
#theme-toggle{margin-left:1rem;padding:.5rem;border:0;border-radius:9999px;background:var(--toggle-bg);color:var(--toggle-fg);cursor:pointer;}
main{min-height:100vh;transition:background-color .2s;}
section{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center;padding:2.5rem;box-sizing:border-box;}
section h1{font-size:2.25rem;}
section p{font-size:1.25rem;max-width:48rem;margin-top:1rem;}
section ul{list-style:disc inside;margin-top:1.5rem;font-size:1.125rem;}
.title{font-size:3rem;color:var(--title);}
.profile{border-radius:9999px;margin-bottom:1.5rem;box-shadow:0 10px 15px -3px rgba(0,0,0,.1);}
form{max-width:32rem;width:100%;margin-top:1.5rem;display:flex;flex-direction:column;gap:1rem;}
input,textarea{padding:1rem;border:0;border-radius:.5rem;background:var(--input-bg);color:var(--input-fg);}
input::placeholder,textarea::placeholder{color:var(--placeholder);}
input:focus,textarea:focus{outline:2px solid var(--focus);}
form button{padding:1rem;border:0;border-radius:.5rem;background:var(--submit-bg);color:var(--submit-fg);transition:transform .15s;}
form button:hover{transform:scale(1.05);}
.site-footer{padding:1.5rem;text-align:center;background:var(--footer-bg);}
";

const SCRIPT: &str = "\
(function () {
  var root = document.documentElement;
  var toggle = document.getElementById('theme-toggle');
  toggle.addEventListener('click', function () {
    var dark = root.classList.toggle('dark');
    toggle.textContent = dark ? 'Light Mode' : 'Dark Mode';
  });
  document.querySelectorAll('[data-scroll-to]').forEach(function (button) {
    button.addEventListener('click', function () {
      var target = document.getElementById(button.dataset.scrollTo);
      if (target) { target.scrollIntoView({ behavior: 'smooth' }); }
    });
  });
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.dataset.reveal = 'visible';
        observer.unobserve(entry.target);
      }
    });
  });
  document.querySelectorAll('[data-reveal]').forEach(function (el) { observer.observe(el); });
})();
";

// ============================================================================
// TEXT
// ============================================================================

fn render_text() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", PAGE.brand);
    let nav: Vec<&str> = SectionId::ALL.iter().map(|id| id.nav_label()).collect();
    let _ = writeln!(out, "{}\n", nav.join(" | "));

    for section in PAGE.sections {
        for block in section.blocks {
            match block {
                Block::Image(image) => {
                    let _ = writeln!(out, "[image: {} ({})]\n", image.alt, image.src);
                }
                Block::Title(text) => {
                    let _ = writeln!(out, "{}\n{}\n", text, "=".repeat(text.width()));
                }
                Block::Heading(text) => {
                    let _ = writeln!(out, "{}\n{}\n", text, "-".repeat(text.width()));
                }
                Block::Paragraph(text) => {
                    let _ = writeln!(out, "{}\n", text);
                }
                Block::Bullets(items) => {
                    for item in *items {
                        match item.strong {
                            Some(strong) => {
                                let _ = writeln!(out, "  * {}{}", strong, item.text.trim_end());
                            }
                            None => {
                                let _ = writeln!(out, "  * {}", item.text);
                            }
                        }
                        if let Some(detail) = item.detail {
                            let _ = writeln!(out, "    {}", detail);
                        }
                    }
                    out.push('\n');
                }
                Block::Form(form) => {
                    for field in form.fields {
                        let _ = writeln!(out, "  [{}]", field.placeholder);
                    }
                    let _ = writeln!(out, "  <{}>\n", form.submit_label);
                }
            }
        }
    }

    let _ = writeln!(out, "{}", PAGE.footer);
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn html(theme: &ThemeController) -> String {
        render_page(ExportFormat::Html, theme).unwrap()
    }

    #[test]
    fn write_page_creates_parents_and_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("index.html");
        let written = write_page(&path, ExportFormat::Html, &ThemeController::new()).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, on_disk.len() as u64);
        assert!(on_disk.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn html_carries_head_metadata() {
        let out = html(&ThemeController::new());
        assert!(out.contains("<title>Ashfa Shakeel | Portfolio</title>"));
        assert!(out.contains("content=\"Ashfa Shakeel&#39;s professional portfolio\""));
        assert!(out.contains("content=\"width=device-width, initial-scale=1\""));
    }

    #[test]
    fn html_root_class_follows_theme() {
        let mut theme = ThemeController::new();
        assert!(html(&theme).contains("<html lang=\"en\">"));
        assert!(html(&theme).contains(">Dark Mode</button>"));

        theme.toggle_dark_mode();
        let out = html(&theme);
        assert!(out.contains("<html lang=\"en\" class=\"dark\">"));
        assert!(out.contains(">Light Mode</button>"));
    }

    #[test]
    fn html_has_every_anchor_and_nav_button() {
        let out = html(&ThemeController::new());
        for id in SectionId::ALL {
            assert!(out.contains(&format!("<section id=\"{}\" data-reveal=\"hidden\">", id)));
            assert!(out.contains(&format!("data-scroll-to=\"{}\"", id)));
        }
    }

    #[test]
    fn html_escapes_content() {
        let out = html(&ThemeController::new());
        assert!(out.contains("<h1>Skills &amp; Expertise</h1>"));
        assert!(!out.contains("Skills & Expertise"));
    }

    #[test]
    fn html_form_has_no_action() {
        let out = html(&ThemeController::new());
        assert!(out.contains("<form>"));
        assert!(!out.contains("action="));
        assert!(out.contains("<input type=\"email\" placeholder=\"Your Email\">"));
        assert!(out.contains("<textarea placeholder=\"Your Message\"></textarea>"));
    }

    #[test]
    fn contact_section_follows_main() {
        let out = html(&ThemeController::new());
        let main_close = out.find("</main>").unwrap();
        let contact = out.find("<section id=\"contact\"").unwrap();
        let education = out.find("<section id=\"education\"").unwrap();
        assert!(education < main_close && main_close < contact);
    }

    #[test]
    fn stylesheet_encodes_reveal_transition() {
        let css = stylesheet();
        assert!(css.contains("rotateX(-10deg)"));
        assert!(css.contains("opacity 0.8s"));
        assert!(css.contains(":root.dark{"));
    }

    #[test]
    fn bullet_lead_is_followed_verbatim() {
        let out = html(&ThemeController::new());
        assert!(out.contains("<strong>Working as a Pharmacist</strong>(2024 - Present)"));
        assert!(out.contains("<strong>House Job</strong> - 2022-23"));
    }

    #[test]
    fn text_underlines_headings() {
        let out = render_page(ExportFormat::Text, &ThemeController::new()).unwrap();
        assert!(out.contains("Experience\n----------\n"));
        assert!(out.contains("  * Bachelor of Pharmacy - University of PUMHSW, 2017"));
        assert!(out.ends_with("All Rights Reserved\n"));
    }

    #[test]
    fn json_lists_sections_by_id() {
        let out = render_page(ExportFormat::Json, &ThemeController::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let ids: Vec<&str> = value["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["home", "about", "skills", "experience", "education", "contact"]);
        assert_eq!(value["meta"]["title"], "Ashfa Shakeel | Portfolio");
    }
}
