use crate::core::store::{CourseAverages, MenuStore};
use crate::domain::model::{Course, MenuItem};
use crate::domain::ports::DisplaySettings;
use std::fmt::Write;

pub fn format_price(settings: &dyn DisplaySettings, price: f64) -> String {
    format!("{}{:.2}", settings.currency_symbol(), price)
}

fn write_item(out: &mut String, settings: &dyn DisplaySettings, number: usize, item: &MenuItem) {
    let _ = writeln!(out, "{}. {} - {}", number, item.dish_name(), item.course());
    if !item.description().is_empty() {
        let _ = writeln!(out, "   {}", item.description());
    }
    let _ = writeln!(out, "   {}", format_price(settings, item.price()));
}

/// Home screen: title, item count and the full menu, numbered from 1.
pub fn home(settings: &dyn DisplaySettings, store: &MenuStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", settings.title());
    let _ = writeln!(out, "Total Items: {}", store.total_items());
    for (i, item) in store.items().iter().enumerate() {
        write_item(&mut out, settings, i + 1, item);
    }
    out
}

pub fn filtered<'a>(
    settings: &dyn DisplaySettings,
    label: &str,
    items: impl Iterator<Item = &'a MenuItem>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Filter Menu Items: {}", label);
    let mut shown = 0;
    for item in items {
        shown += 1;
        write_item(&mut out, settings, shown, item);
    }
    if shown == 0 {
        let _ = writeln!(out, "No items found");
    }
    out
}

pub fn averages(settings: &dyn DisplaySettings, averages: &CourseAverages) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Average price per course");
    if averages.is_empty() {
        let _ = writeln!(out, "No items found");
    }
    for (course, avg) in averages.iter() {
        let _ = writeln!(out, "  {:<9} {}", course, format_price(settings, avg));
    }
    out
}

pub fn help() -> String {
    let courses: Vec<&str> = Course::ALL.iter().map(|c| c.as_str()).collect();
    format!(
        "Commands:\n  \
         list                 show the whole menu\n  \
         add                  add a dish (type 'cancel' to leave the form)\n  \
         delete <n>           delete dish number n\n  \
         filter <course|all>  show one course ({})\n  \
         averages             average price per course\n  \
         back                 previous screen\n  \
         help                 this text\n  \
         quit                 exit\n",
        courses.join(", ")
    )
}
