use std::fmt::{Display, Formatter};

use application::form::{BookingForm, FormPhase};

use crate::presenter::Exhaust;

static DROPDOWN_MAX_WIDTH: u32 = 640;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestInput {
    /// Narrow screens pick from `0..=max`, so out-of-range counts cannot be
    /// entered.
    Dropdown { max: u32, selected: u32 },
    Numeric { value: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    SignIn,
    PickDates,
    Book { price: f64, disabled: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingPanel {
    pub nightly_price: f64,
    pub check_in: String,
    pub check_out: String,
    pub guests: GuestInput,
    pub contact: Option<ContactFields>,
    pub action: BookingAction,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingWidgetView {
    Panel(BookingPanel),
    Redirect { to: String },
}

pub struct BookingWidgetPresenter {
    viewport_width: u32,
}

impl BookingWidgetPresenter {
    pub fn new(viewport_width: u32) -> Self {
        Self { viewport_width }
    }
}

impl Exhaust<&BookingForm> for BookingWidgetPresenter {
    type To = BookingWidgetView;
    fn emit(&self, form: &BookingForm) -> Self::To {
        if let Some(redirect) = form.redirect() {
            return BookingWidgetView::Redirect {
                to: redirect.to_string(),
            };
        }

        let selected: u32 = *form.guests().as_ref();
        let guests = match form.place().max_guests() {
            Some(max) if self.viewport_width <= DROPDOWN_MAX_WIDTH => {
                GuestInput::Dropdown {
                    max: *max.as_ref(),
                    selected,
                }
            }
            _ => GuestInput::Numeric { value: selected },
        };

        let nights = form.nights();
        let contact = nights.is_bookable().then(|| {
            let name: &String = form.name().as_ref();
            let phone: &String = form.phone().as_ref();
            ContactFields {
                name: name.clone(),
                phone: phone.clone(),
            }
        });
        let action = if !form.is_signed_in() {
            BookingAction::SignIn
        } else if !nights.is_bookable() {
            BookingAction::PickDates
        } else {
            BookingAction::Book {
                price: *form.price().as_ref(),
                disabled: form.phase() != &FormPhase::Editing,
            }
        };

        BookingWidgetView::Panel(BookingPanel {
            nightly_price: *form.place().price().as_ref(),
            check_in: form.check_in().map(|date| date.to_string()).unwrap_or_default(),
            check_out: form
                .check_out()
                .map(|date| date.to_string())
                .unwrap_or_default(),
            guests,
            contact,
            action,
            error: form.last_error().clone(),
        })
    }
}

impl Display for BookingWidgetView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let panel = match self {
            BookingWidgetView::Redirect { to } => return write!(f, "-> {to}"),
            BookingWidgetView::Panel(panel) => panel,
        };
        writeln!(f, "Price: ${} /per night", panel.nightly_price)?;
        writeln!(f, "Check in:  {}", display_date(&panel.check_in))?;
        writeln!(f, "Check out: {}", display_date(&panel.check_out))?;
        match &panel.guests {
            GuestInput::Dropdown { max, selected } => {
                writeln!(f, "Number of guests: {selected} (choose 0-{max})")?
            }
            GuestInput::Numeric { value } => writeln!(f, "Number of guests: {value}")?,
        }
        if let Some(contact) = &panel.contact {
            writeln!(f, "Your full name: {}", contact.name)?;
            writeln!(f, "Phone number:   {}", contact.phone)?;
        }
        if let Some(error) = &panel.error {
            writeln!(f, "! {error}")?;
        }
        match &panel.action {
            BookingAction::SignIn => write!(f, "Please Login To Book"),
            BookingAction::PickDates => write!(f, "Pick your dates to book"),
            BookingAction::Book { price, disabled } => {
                let suffix = if *disabled { " (sending...)" } else { "" };
                write!(f, "[Book this place ${price}]{suffix}")
            }
        }
    }
}

fn display_date(date: &str) -> &str {
    if date.is_empty() {
        "--"
    } else {
        date
    }
}
