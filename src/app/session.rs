use crate::app::render;
use crate::app::screens::{AddMenuForm, CourseSelector, DeletePrompt};
use crate::core::navigation::{Navigator, Route};
use crate::domain::ports::DisplaySettings;
use crate::utils::error::{Field, IndexError, MenuError};

const FORM_FIELDS: [Field; 4] = [Field::DishName, Field::Description, Field::Course, Field::Price];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Command,
    Form(usize),
    Confirm(DeletePrompt),
    Finished,
}

/// A line-driven menu session: one [`Navigator`] plus the screen state of the
/// add form, the course selector and any pending delete.
pub struct Session<D: DisplaySettings> {
    settings: D,
    navigator: Navigator,
    form: AddMenuForm,
    selector: CourseSelector,
    mode: Mode,
}

impl<D: DisplaySettings> Session<D> {
    pub fn new(settings: D, navigator: Navigator) -> Self {
        Self {
            settings,
            navigator,
            form: AddMenuForm::new(),
            selector: CourseSelector::default(),
            mode: Mode::Command,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn form(&self) -> &AddMenuForm {
        &self.form
    }

    pub fn is_finished(&self) -> bool {
        self.mode == Mode::Finished
    }

    /// Text to show before reading the next line.
    pub fn prompt(&self) -> String {
        match self.mode {
            Mode::Command | Mode::Finished => format!("{}> ", self.navigator.current()),
            Mode::Form(step) => {
                let field = FORM_FIELDS[step];
                let current = self.form.value(field);
                if current.is_empty() {
                    format!("{}: ", capitalize(&field.to_string()))
                } else {
                    format!("{} [{}]: ", capitalize(&field.to_string()), current)
                }
            }
            Mode::Confirm(prompt) => {
                let name = self
                    .navigator
                    .store()
                    .get(prompt.index())
                    .map(|item| item.dish_name().to_string())
                    .unwrap_or_default();
                format!("Delete '{}'? [y/N] ", name)
            }
        }
    }

    /// Handles one line of input and returns the text to display.
    pub fn handle_line(&mut self, line: &str) -> String {
        match self.mode {
            Mode::Finished => String::new(),
            Mode::Form(step) => self.handle_form_input(step, line),
            Mode::Confirm(prompt) => self.handle_confirmation(prompt, line),
            Mode::Command => self.handle_command(line),
        }
    }

    fn handle_command(&mut self, line: &str) -> String {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return String::new();
        };
        let rest: Vec<&str> = parts.collect();

        match command.to_ascii_lowercase().as_str() {
            "list" | "home" => {
                self.navigator.navigate(Route::Home);
                render::home(&self.settings, self.navigator.store())
            }
            "add" => {
                self.navigator.navigate(Route::AddMenu);
                self.mode = Mode::Form(0);
                "Add Menu (press enter to keep the value in brackets)\n".to_string()
            }
            "delete" | "rm" => self.start_delete(rest.first().copied()),
            "filter" => {
                if let Err(e) = self.selector.select(&rest.join(" ")) {
                    return error_text(e.into());
                }
                self.navigator.navigate(Route::FilterMenu);
                self.render_filter()
            }
            "averages" | "avg" => {
                render::averages(&self.settings, &self.navigator.store().average_price_by_course())
            }
            "back" => {
                let route = self.navigator.back();
                format!("Back to {}\n", route)
            }
            "help" | "?" => render::help(),
            "quit" | "exit" | "q" => {
                self.mode = Mode::Finished;
                "Goodbye!\n".to_string()
            }
            other => format!("Unknown command '{}'. Type 'help' for commands.\n", other),
        }
    }

    fn render_filter(&self) -> String {
        render::filtered(
            &self.settings,
            self.selector.label(),
            self.navigator
                .store()
                .filter_by_course(self.selector.selected()),
        )
    }

    fn start_delete(&mut self, arg: Option<&str>) -> String {
        let Some(number) = arg.and_then(|a| a.parse::<usize>().ok()) else {
            return "Usage: delete <n>, where n is the dish number from 'list'\n".to_string();
        };

        // Dish numbers shown to the user start at 1
        let len = self.navigator.store().len();
        let Some(index) = number.checked_sub(1) else {
            return "Dish numbers start at 1\n".to_string();
        };
        if index >= len {
            return error_text(IndexError::OutOfRange { index, len }.into());
        }

        self.mode = Mode::Confirm(DeletePrompt::new(index));
        String::new()
    }

    fn handle_confirmation(&mut self, prompt: DeletePrompt, line: &str) -> String {
        self.mode = Mode::Command;
        let answer = line.trim().to_ascii_lowercase();
        if answer != "y" && answer != "yes" {
            prompt.cancel();
            return "Delete cancelled\n".to_string();
        }

        match prompt.confirm(self.navigator.store_mut()) {
            Ok(item) => {
                tracing::info!("🗑️ Deleted '{}'", item.dish_name());
                let mut out = format!("Deleted '{}'\n", item.dish_name());
                out.push_str(&render::home(&self.settings, self.navigator.store()));
                out.push_str(&render::averages(
                    &self.settings,
                    &self.navigator.store().average_price_by_course(),
                ));
                out
            }
            Err(e) => error_text(e.into()),
        }
    }

    fn handle_form_input(&mut self, step: usize, line: &str) -> String {
        let input = line.trim();
        if input.eq_ignore_ascii_case("cancel") {
            self.mode = Mode::Command;
            self.navigator.back();
            return "Add cancelled, the form keeps what you typed\n".to_string();
        }

        if !input.is_empty() {
            self.form.set(FORM_FIELDS[step], input);
        }

        if step + 1 < FORM_FIELDS.len() {
            self.mode = Mode::Form(step + 1);
            return String::new();
        }

        match self.form.submit(self.navigator.store_mut()) {
            Ok(item) => {
                tracing::info!("✅ Added '{}' to {}", item.dish_name(), item.course());
                self.mode = Mode::Command;
                self.navigator.navigate(Route::Home);
                let mut out = format!("Added '{}'\n", item.dish_name());
                out.push_str(&render::home(&self.settings, self.navigator.store()));
                out.push_str(&render::averages(
                    &self.settings,
                    &self.navigator.store().average_price_by_course(),
                ));
                out
            }
            Err(e) => {
                // Start over with the entered values kept as defaults
                self.mode = Mode::Form(0);
                error_text(e.into())
            }
        }
    }
}

fn error_text(err: MenuError) -> String {
    format!(
        "❌ {}\n💡 {}\n",
        err.user_friendly_message(),
        err.recovery_suggestion()
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DefaultDisplay;

    fn session() -> Session<DefaultDisplay> {
        Session::new(DefaultDisplay, Navigator::default())
    }

    fn feed(session: &mut Session<DefaultDisplay>, lines: &[&str]) -> String {
        lines.iter().map(|l| session.handle_line(l)).collect()
    }

    #[test]
    fn test_prompt_shows_field_and_current_value() {
        let mut s = session();
        assert_eq!(s.prompt(), "Home> ");
        s.handle_line("add");
        assert_eq!(s.prompt(), "Dish name: ");
        s.handle_line("Soup");
        s.handle_line("Hot");
        assert_eq!(s.prompt(), "Course [Starters]: ");
    }

    #[test]
    fn test_add_flow() {
        let mut s = session();
        let out = feed(&mut s, &["add", "Soup", "Hot", "", "45.5"]);
        assert!(out.contains("Added 'Soup'"));
        assert!(out.contains("Total Items: 1"));
        assert_eq!(s.navigator().current(), Route::Home);
        assert_eq!(s.form(), &AddMenuForm::new());
    }

    #[test]
    fn test_failed_add_keeps_form() {
        let mut s = session();
        let out = feed(&mut s, &["add", "Soup", "Hot", "Mains", "cheap"]);
        assert!(out.contains("not a valid price"));
        assert_eq!(s.form().value(Field::DishName), "Soup");
        assert_eq!(s.prompt(), "Dish name [Soup]: ");
        assert!(s.navigator().store().is_empty());

        let out = feed(&mut s, &["", "", "", "80"]);
        assert!(out.contains("Added 'Soup'"));
        assert_eq!(s.navigator().store().items()[0].price(), 80.0);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut s = session();
        feed(&mut s, &["add", "Soup", "Hot", "", "10"]);

        s.handle_line("delete 1");
        assert_eq!(s.prompt(), "Delete 'Soup'? [y/N] ");
        assert_eq!(s.handle_line("n"), "Delete cancelled\n");
        assert_eq!(s.navigator().store().len(), 1);

        feed(&mut s, &["add", "Steak", "Grilled", "Mains", "90"]);
        let out = s.handle_line("averages");
        assert!(out.contains("Starters  R10.00"));

        s.handle_line("delete 1");
        let out = s.handle_line("y");
        assert!(out.contains("Deleted 'Soup'"));
        assert!(out.contains("Average price per course"));
        assert!(out.contains("Mains     R90.00"));
        assert!(!out.contains("Starters  R"));
        assert_eq!(s.navigator().store().len(), 1);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut s = session();
        let out = s.handle_line("delete 1");
        assert!(out.contains("The menu is empty"));
        assert_eq!(s.handle_line("delete 0"), "Dish numbers start at 1\n");
        assert_eq!(s.prompt(), "Home> ");
    }

    #[test]
    fn test_filter_and_quit() {
        let mut s = session();
        feed(&mut s, &["add", "Cake", "Sweet", "Desserts", "30"]);

        let out = s.handle_line("filter mains");
        assert!(out.contains("No items found"));
        assert_eq!(s.navigator().current(), Route::FilterMenu);

        let out = s.handle_line("filter all");
        assert!(out.contains("1. Cake - Desserts"));

        s.handle_line("quit");
        assert!(s.is_finished());
    }
}
