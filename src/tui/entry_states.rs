use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{EntryContext, EntryOutcome, EntryState};
use crate::controllers::{REFERENCE_BATCH, generate_report, load_ingredients_from_manual};
use crate::models::api::ScaleRequest;
use crate::models::{
    Guests, ManualForm, SUGGESTED_UNITS, SourcingChoice, SourcingType, UnitChoice,
};

/// Render a single bordered input box filling the frame
fn render_input(frame: &mut Frame, input: &str, title: String, error: Option<&str>) {
    let title = match error {
        Some(error) => format!("{} - ERROR: {}", title, error),
        None => title,
    };
    let block = Paragraph::new(input).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(block, frame.area());
}

/// Move on to the next record, or to the guest count after the last one
fn advance(context: &mut EntryContext) -> Box<dyn EntryState> {
    context.current += 1;
    if context.current < context.form.entries.len() {
        Box::new(IngredientName::new())
    } else {
        Box::new(GuestCount::new())
    }
}

pub(crate) struct IngredientCount {
    current_input: String,
    error_message: Option<String>,
}

impl IngredientCount {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
            error_message: None,
        }
    }
}

impl EntryState for IngredientCount {
    fn render(&self, context: &EntryContext, frame: &mut Frame) {
        render_input(
            frame,
            &self.current_input,
            format!(
                "Number of Ingredients (Enter for {})",
                context.default_count
            ),
            self.error_message.as_deref(),
        );
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut EntryContext,
    ) -> Option<Box<dyn EntryState>> {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.current_input.push(c);
                self.error_message = None;
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                self.error_message = None;
                None
            }
            KeyCode::Enter => {
                let count = if self.current_input.is_empty() {
                    Ok(context.default_count)
                } else {
                    self.current_input.parse::<usize>()
                };

                let form = count
                    .map_err(|e| e.to_string())
                    .and_then(|count| {
                        ManualForm::new(count, context.form.variant).map_err(|e| e.to_string())
                    });

                match form {
                    Ok(form) => {
                        context.form = form;
                        context.current = 0;
                        Some(Box::new(IngredientName::new()))
                    }
                    Err(error) => {
                        self.error_message = Some(error);
                        None
                    }
                }
            }
            _ => None,
        }
    }
}

pub(crate) struct IngredientName {
    current_input: String,
}

impl IngredientName {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
        }
    }
}

impl EntryState for IngredientName {
    fn render(&self, context: &EntryContext, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(frame.area());

        let entered: Vec<Line> = context
            .form
            .entries
            .iter()
            .take(context.current)
            .map(|entry| {
                if entry.name.trim().is_empty() {
                    Line::from(Span::styled(
                        "(blank, will be skipped)",
                        Style::default().add_modifier(Modifier::ITALIC),
                    ))
                } else {
                    let mut text = format!("{}: {}", entry.name, entry.quantity);
                    if context.form.variant.has_units() {
                        text.push(' ');
                        text.push_str(entry.unit.label());
                    }
                    Line::from(vec![
                        Span::raw(text),
                        Span::raw(" "),
                        Span::styled(
                            format!("({})", SourcingType::from(entry.sourcing)),
                            Style::default().add_modifier(Modifier::ITALIC),
                        ),
                    ])
                }
            })
            .collect();

        let list = Paragraph::new(entered).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Ingredients for {} guests", REFERENCE_BATCH)),
        );
        frame.render_widget(list, chunks[0]);

        let title = format!(
            "Ingredient {} of {} Name (leave blank to skip)",
            context.current + 1,
            context.form.entries.len()
        );
        let input = Paragraph::new(self.current_input.as_str())
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(input, chunks[1]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut EntryContext,
    ) -> Option<Box<dyn EntryState>> {
        match key {
            KeyCode::Char(c) => {
                self.current_input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                if let Some(entry) = context.current_entry_mut() {
                    entry.name = self.current_input.clone();
                }
                Some(Box::new(IngredientQuantity::new()))
            }
            _ => None,
        }
    }
}

pub(crate) struct IngredientQuantity {
    current_input: String,
    error_message: Option<String>,
}

impl IngredientQuantity {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
            error_message: None,
        }
    }
}

impl EntryState for IngredientQuantity {
    fn render(&self, context: &EntryContext, frame: &mut Frame) {
        render_input(
            frame,
            &self.current_input,
            format!(
                "Quantity of {} for {} guests (Enter for 0)",
                context.current_name(),
                REFERENCE_BATCH
            ),
            self.error_message.as_deref(),
        );
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut EntryContext,
    ) -> Option<Box<dyn EntryState>> {
        match key {
            // No sign key, so a quantity can never be negative
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.current_input.push(c);
                self.error_message = None;
                None
            }
            KeyCode::Char('.') if !self.current_input.contains('.') => {
                self.current_input.push('.');
                self.error_message = None;
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                self.error_message = None;
                None
            }
            KeyCode::Enter => {
                let quantity = if self.current_input.is_empty() {
                    Some(0.0)
                } else {
                    self.current_input.parse::<f64>().ok()
                };

                match quantity.filter(|quantity| quantity.is_finite()) {
                    Some(quantity) => {
                        if let Some(entry) = context.current_entry_mut() {
                            entry.quantity = quantity;
                        }
                        Some(Box::new(IngredientType::new()))
                    }
                    None => {
                        self.error_message = Some(format!("'{}' is not a number", self.current_input));
                        None
                    }
                }
            }
            _ => None,
        }
    }
}

pub(crate) struct IngredientType {
    choice: SourcingChoice,
}

impl IngredientType {
    pub fn new() -> Self {
        Self {
            choice: SourcingChoice::default(),
        }
    }
}

impl EntryState for IngredientType {
    fn render(&self, context: &EntryContext, frame: &mut Frame) {
        let option = |label: &'static str, choice: SourcingChoice| {
            if self.choice == choice {
                Span::styled(
                    format!("[{}]", label),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(format!(" {} ", label))
            }
        };

        let line = Line::from(vec![
            option("wholesale", SourcingChoice::Wholesale),
            Span::raw("  "),
            option("retail", SourcingChoice::Retail),
        ]);

        let block = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(
            format!(
                "Type of {} (Left/Right or w/r, Enter to confirm)",
                context.current_name()
            ),
        ));
        frame.render_widget(block, frame.area());
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut EntryContext,
    ) -> Option<Box<dyn EntryState>> {
        match key {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.choice = self.choice.toggled();
                None
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.choice = SourcingChoice::Retail;
                None
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                self.choice = SourcingChoice::Wholesale;
                None
            }
            KeyCode::Enter => {
                if let Some(entry) = context.current_entry_mut() {
                    entry.sourcing = self.choice;
                }
                if context.form.variant.has_units() {
                    Some(Box::new(IngredientUnit::new()))
                } else {
                    Some(advance(context))
                }
            }
            _ => None,
        }
    }
}

/// Picks one of the suggested units, or "Other" one past the end of the list
pub(crate) struct IngredientUnit {
    selected: usize,
}

impl IngredientUnit {
    const OTHER: usize = SUGGESTED_UNITS.len();

    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl EntryState for IngredientUnit {
    fn render(&self, context: &EntryContext, frame: &mut Frame) {
        let lines: Vec<Line> = SUGGESTED_UNITS
            .iter()
            .copied()
            .chain(std::iter::once("Other"))
            .enumerate()
            .map(|(i, label)| {
                if i == self.selected {
                    Line::from(Span::styled(
                        format!("> {}", label),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(format!("  {}", label))
                }
            })
            .collect();

        let block = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(
            format!(
                "Unit of {} (Up/Down, Enter to confirm)",
                context.current_name()
            ),
        ));
        frame.render_widget(block, frame.area());
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut EntryContext,
    ) -> Option<Box<dyn EntryState>> {
        match key {
            KeyCode::Down => {
                self.selected = (self.selected + 1) % (Self::OTHER + 1);
                None
            }
            KeyCode::Up => {
                self.selected = (self.selected + Self::OTHER) % (Self::OTHER + 1);
                None
            }
            KeyCode::Enter if self.selected == Self::OTHER => Some(Box::new(CustomUnit::new())),
            KeyCode::Enter => {
                if let Some(entry) = context.current_entry_mut() {
                    entry.unit = UnitChoice::Suggested(self.selected);
                }
                Some(advance(context))
            }
            _ => None,
        }
    }
}

pub(crate) struct CustomUnit {
    current_input: String,
}

impl CustomUnit {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
        }
    }
}

impl EntryState for CustomUnit {
    fn render(&self, context: &EntryContext, frame: &mut Frame) {
        render_input(
            frame,
            &self.current_input,
            format!("Custom unit for {}", context.current_name()),
            None,
        );
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut EntryContext,
    ) -> Option<Box<dyn EntryState>> {
        match key {
            KeyCode::Char(c) => {
                self.current_input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                if let Some(entry) = context.current_entry_mut() {
                    entry.unit = UnitChoice::Other(self.current_input.clone());
                }
                Some(advance(context))
            }
            _ => None,
        }
    }
}

pub(crate) struct GuestCount {
    current_input: String,
    error_message: Option<String>,
}

impl GuestCount {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
            error_message: None,
        }
    }
}

impl EntryState for GuestCount {
    fn render(&self, context: &EntryContext, frame: &mut Frame) {
        render_input(
            frame,
            &self.current_input,
            format!(
                "Number of Guests (Enter for {})",
                context.default_guests.get()
            ),
            self.error_message.as_deref(),
        );
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut EntryContext,
    ) -> Option<Box<dyn EntryState>> {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.current_input.push(c);
                self.error_message = None;
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                self.error_message = None;
                None
            }
            KeyCode::Enter => {
                let guests = if self.current_input.is_empty() {
                    Ok(context.default_guests)
                } else {
                    self.current_input
                        .parse::<u32>()
                        .map_err(|e| e.to_string())
                        .and_then(|count| Guests::new(count).map_err(|e| e.to_string()))
                };

                match guests {
                    Ok(guests) => {
                        context.guests = Some(guests);
                        context.outcome = Some(generate(context, guests));
                        Some(Box::new(ReportView))
                    }
                    Err(error) => {
                        self.error_message = Some(error);
                        None
                    }
                }
            }
            _ => None,
        }
    }
}

fn generate(context: &EntryContext, guests: Guests) -> EntryOutcome {
    match load_ingredients_from_manual(&context.form) {
        Ok(ingredients) => match generate_report(&ScaleRequest::new(ingredients, guests)) {
            Some(report) => EntryOutcome::Generated(report),
            None => EntryOutcome::Empty,
        },
        Err(error) => EntryOutcome::Failed(error.to_string()),
    }
}

pub(crate) struct ReportView;

impl EntryState for ReportView {
    fn render(&self, context: &EntryContext, frame: &mut Frame) {
        let (shopping_list, recipe) = match &context.outcome {
            Some(EntryOutcome::Generated(report)) => {
                (report.shopping_list.clone(), report.recipe.clone())
            }
            Some(EntryOutcome::Failed(error)) => (format!("ERROR: {}", error), String::new()),
            Some(EntryOutcome::Empty) | None => (
                "No ingredients entered, nothing to generate.".to_string(),
                String::new(),
            ),
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(frame.area());

        let guests = context.guests.map(Guests::get).unwrap_or_default();
        let left = Paragraph::new(shopping_list).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Shopping List for {} guests (q to quit)", guests)),
        );
        frame.render_widget(left, chunks[0]);

        let right = Paragraph::new(recipe)
            .block(Block::default().borders(Borders::ALL).title("Generated Recipe"));
        frame.render_widget(right, chunks[1]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut EntryContext,
    ) -> Option<Box<dyn EntryState>> {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Enter = key {
            context.finished = true;
        }
        None
    }
}
