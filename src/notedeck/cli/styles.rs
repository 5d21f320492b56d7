use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub title: Style,
    pub rule: Style,
    pub index: Style,
    pub status: Style,
    pub hint: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

pub static NOTEDECK_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    title: Style::new().bold(),
    rule: Style::new().color256(245),
    index: Style::new().yellow(),
    status: Style::new().cyan(),
    hint: Style::new().color256(245).italic(),
    info: Style::new().dim(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red(),
});
