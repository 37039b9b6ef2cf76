//! Whole-paper markup rendering
//!
//! Produces the paper as HTML: a bordered header block, an optional
//! general-instructions block, and a three-column table (Q.No, Questions,
//! Marks) with a title row per section. Each question's middle cell lists
//! its elements in the question's order.
//!
//! Edit mode emits input surfaces, drag attributes and add/delete buttons;
//! every control that must not print carries the `no-print` class. View
//! mode emits read-only text with colon line breaks and math spans.

use crate::{
    escape_html, expand_view_text, question_elements, segments_to_html, ElementContent,
    ElementDescriptor, MarkupWriter, OptionsLayout, RenderMode,
};
use exam_model::{Document, ElementRef, Header, Question, QuestionPath, Section, SubQuestion};

/// Renders a document to paper markup in one mode
#[derive(Debug, Clone, Copy, Default)]
pub struct PaperRenderer {
    mode: RenderMode,
    drag_origin: Option<ElementRef>,
}

fn question_attrs(path: QuestionPath) -> String {
    format!(
        " data-section=\"{}\" data-question=\"{}\"",
        path.section, path.question
    )
}

fn button(action: &str, attrs: &str, label: &str) -> String {
    format!("<button class=\"no-print\" data-action=\"{action}\"{attrs}>{label}</button>")
}

fn input(field: &str, attrs: &str, value: &str) -> String {
    format!(
        "<input data-field=\"{field}\"{attrs} value=\"{}\"/>",
        escape_html(value)
    )
}

fn textarea(field: &str, attrs: &str, value: &str) -> String {
    format!(
        "<textarea data-field=\"{field}\"{attrs}>{}</textarea>",
        escape_html(value)
    )
}

impl PaperRenderer {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            drag_origin: None,
        }
    }

    /// Mark the element currently being dragged
    pub fn with_drag_origin(mut self, origin: Option<ElementRef>) -> Self {
        self.drag_origin = origin;
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    fn editing(&self) -> bool {
        self.mode.is_editing()
    }

    /// Render the full paper
    pub fn render(&self, document: &Document) -> String {
        let mut w = MarkupWriter::new();
        w.open("<div class=\"paper-canvas\">");

        self.render_header(&mut w, &document.header);
        self.render_instructions(&mut w, &document.header);

        w.open("<table class=\"paper-table\">");
        w.line("<thead><tr><th class=\"q-no\">Q.No</th><th>Questions</th><th class=\"q-marks\">Marks</th></tr></thead>");
        w.open("<tbody>");
        for (index, section) in document.sections.iter().enumerate() {
            self.render_section(&mut w, index, section);
        }
        w.close("</tbody>");
        w.close("</table>");

        if self.editing() {
            w.line(&format!(
                "<div class=\"no-print add-section\">{}</div>",
                button("add-section", "", "Add New Section")
            ));
        }

        w.close("</div>");
        w.finish()
    }

    /// Render the question's middle-cell content only
    pub fn render_question_body(&self, path: QuestionPath, question: &Question) -> String {
        let mut w = MarkupWriter::new();
        self.render_question_elements(&mut w, path, question);
        w.finish()
    }

    fn render_header(&self, w: &mut MarkupWriter, header: &Header) {
        let field = |name: &str, value: &str| {
            if self.editing() {
                input(name, "", value)
            } else {
                escape_html(value)
            }
        };

        w.open("<div class=\"paper-header\">");
        w.line(&format!("<h1 class=\"school\">{}</h1>", field("school", &header.school)));
        w.line(&format!("<h2 class=\"exam-name\">{}</h2>", field("exam_name", &header.exam_name)));
        w.open("<div class=\"header-meta\">");
        w.line(&format!("<span>Time: {}</span>", field("time", &header.time)));
        w.line(&format!("<span>Max Marks: {}</span>", field("marks", &header.marks)));
        w.close("</div>");
        w.close("</div>");
    }

    fn render_instructions(&self, w: &mut MarkupWriter, header: &Header) {
        let instructions = header.instructions.as_deref().unwrap_or_default();

        if !header.has_instructions() {
            if self.editing() {
                w.line(&format!(
                    "<div class=\"no-print add-instructions\">{}</div>",
                    button("add-instructions", "", "Add General Instructions")
                ));
            }
            return;
        }

        w.open("<div class=\"instructions\">");
        w.line("<h3>General Instructions</h3>");
        if self.editing() {
            w.line(&textarea("instructions", "", instructions));
            w.line(&button("remove-instructions", "", "&times;"));
        } else {
            w.line(&format!(
                "<div>{}</div>",
                segments_to_html(&expand_view_text(instructions))
            ));
        }
        w.close("</div>");
    }

    fn render_section(&self, w: &mut MarkupWriter, index: usize, section: &Section) {
        let attrs = format!(" data-section=\"{index}\"");

        w.open("<tr class=\"section-row\">");
        if self.editing() {
            w.line(&format!(
                "<td colspan=\"3\">{}{}</td>",
                input("title", &attrs, &section.title),
                button("delete-section", &attrs, "&times;")
            ));
        } else {
            w.line(&format!("<td colspan=\"3\">{}</td>", escape_html(&section.title)));
        }
        w.close("</tr>");

        for (q, question) in section.questions.iter().enumerate() {
            self.render_question_row(w, QuestionPath::new(index, q), question);
        }

        if self.editing() {
            w.line(&format!(
                "<tr class=\"no-print\"><td colspan=\"3\">{}{}</td></tr>",
                button("add-question", &attrs, "Add Question"),
                button("add-or-question", &attrs, "Add OR Question")
            ));
        }
    }

    fn render_question_row(&self, w: &mut MarkupWriter, path: QuestionPath, question: &Question) {
        let attrs = question_attrs(path);
        let scalar = |name: &str, value: &str| {
            if self.editing() {
                input(name, &attrs, value)
            } else {
                escape_html(value)
            }
        };

        w.open("<tr class=\"question-row\">");
        w.line(&format!("<td class=\"q-number\">{}</td>", scalar("number", &question.number)));
        w.open("<td class=\"q-body\">");
        self.render_question_elements(w, path, question);
        if self.editing() {
            self.render_question_affordances(w, path, question);
        }
        w.close("</td>");
        w.line(&format!("<td class=\"q-marks\">{}</td>", scalar("marks", &question.marks)));
        w.close("</tr>");
    }

    fn render_question_elements(&self, w: &mut MarkupWriter, path: QuestionPath, question: &Question) {
        for descriptor in question_elements(question, path, self.drag_origin) {
            self.render_element(w, &descriptor);
        }
    }

    fn render_question_affordances(&self, w: &mut MarkupWriter, path: QuestionPath, question: &Question) {
        let attrs = question_attrs(path);
        let mut buttons = String::new();
        if question.context_passage().is_none() {
            buttons.push_str(&button("add-context", &attrs, "Add Context/Passage"));
        }
        if question.diagram().is_none() {
            buttons.push_str(&button("add-image", &attrs, "Add Diagram"));
        }
        buttons.push_str(&button("add-sub-question", &attrs, "Add Sub-Question"));
        buttons.push_str(&button("add-option", &attrs, "Add Option/Choice"));
        w.line(&format!("<div class=\"no-print q-actions\">{buttons}</div>"));
    }

    fn view_text(&self, text: &str) -> String {
        segments_to_html(&expand_view_text(text))
    }

    fn render_element(&self, w: &mut MarkupWriter, descriptor: &ElementDescriptor<'_>) {
        let element = descriptor.element;
        let attrs = question_attrs(element.path);
        let mut class = format!("q-{}", element.kind.as_str().replace('_', "-"));
        if let ElementContent::Options(options) = descriptor.content {
            class.push(' ');
            class.push_str(OptionsLayout::for_options(options).class_name());
        }
        if descriptor.dragging {
            class.push_str(" dragging");
        }

        let drag_attrs = if self.editing() {
            format!(" draggable=\"true\" data-kind=\"{}\"{attrs}", element.kind)
        } else {
            String::new()
        };

        w.open(&format!("<div class=\"{class}\"{drag_attrs}>"));
        match descriptor.content {
            ElementContent::Context(text) => {
                if self.editing() {
                    w.line(&button("remove-context", &attrs, "&times;"));
                    w.line(&textarea("context", &attrs, text));
                } else {
                    w.line(&format!("<div class=\"italic\">{}</div>", self.view_text(text)));
                }
            }
            ElementContent::Text(text) => {
                if self.editing() {
                    w.line(&button("delete-question", &attrs, "&times;"));
                    w.line(&textarea("text", &attrs, text));
                } else {
                    w.line(&format!("<div>{}</div>", self.view_text(text)));
                }
            }
            ElementContent::Image(image) => {
                w.line(&format!(
                    "<img class=\"q-diagram\" src=\"{}\" alt=\"Question diagram\"/>",
                    escape_html(image.as_str())
                ));
                if self.editing() {
                    w.line(&button("remove-image", &attrs, "&times;"));
                }
            }
            ElementContent::Options(options) => self.render_options(w, element.path, options),
            ElementContent::SubQuestions(subs) => {
                for (index, sub) in subs.iter().enumerate() {
                    self.render_sub_question(w, element.path, index, sub);
                }
            }
        }
        w.close("</div>");
    }

    fn render_options(&self, w: &mut MarkupWriter, path: QuestionPath, options: &[String]) {
        let layout = OptionsLayout::for_options(options);
        for (index, option) in options.iter().enumerate() {
            if self.editing() {
                let attrs = format!("{} data-option=\"{index}\"", question_attrs(path));
                w.line(&format!(
                    "<div class=\"option\">{}{}</div>",
                    textarea("option", &attrs, option),
                    button("delete-option", &attrs, "&times;")
                ));
            } else {
                let class = if layout.emphasizes(option) { "option emphasized" } else { "option" };
                w.line(&format!("<div class=\"{class}\">{}</div>", self.view_text(option)));
            }
        }
    }

    fn render_sub_question(&self, w: &mut MarkupWriter, path: QuestionPath, index: usize, sub: &SubQuestion) {
        let attrs = format!("{} data-sub=\"{index}\"", question_attrs(path));

        w.open("<div class=\"sub-question\">");
        if self.editing() {
            w.line(&format!(
                "<span class=\"sub-number\">{}.</span>",
                input("sub_number", &attrs, &sub.number)
            ));
            w.line(&textarea("sub_text", &attrs, &sub.text));
            w.line(&format!(
                "<span class=\"sub-marks\">[{}]</span>",
                input("sub_marks", &attrs, &sub.marks)
            ));
            w.line(&button("delete-sub-question", &attrs, "&times;"));
        } else {
            w.line(&format!("<span class=\"sub-number\">{}.</span>", escape_html(&sub.number)));
            w.line(&format!("<div class=\"sub-text\">{}</div>", self.view_text(&sub.text)));
            w.line(&format!("<span class=\"sub-marks\">[{}]</span>", escape_html(&sub.marks)));
        }

        let options = sub.options();
        if !options.is_empty() {
            w.open("<div class=\"sub-options\">");
            for (option_index, option) in options.iter().enumerate() {
                if self.editing() {
                    let option_attrs = format!("{attrs} data-option=\"{option_index}\"");
                    w.line(&format!(
                        "<div class=\"option\">{}{}</div>",
                        textarea("sub_option", &option_attrs, option),
                        button("delete-sub-option", &option_attrs, "&times;")
                    ));
                } else {
                    w.line(&format!("<div class=\"option\">{}</div>", self.view_text(option)));
                }
            }
            if self.editing() {
                w.line(&button("add-sub-option", &attrs, "Add Option"));
            }
            w.close("</div>");
        }
        w.close("</div>");
    }
}
