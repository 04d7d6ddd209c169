use application::form::BookingForm;
use application::service::{OpenBookingFormService, SubmitBookingService};
use application::transfer::GetPlaceDto;
use error_stack::ResultExt;
use kernel::KernelError;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::ErrorBanner;
use crate::handler::AppModule;
use crate::presenter::Exhaust;
use crate::view::{
    AccountNav, BookingWidgetPresenter, BookingWidgetView, ImageResolver, ListingPresenter,
};
use crate::viewport::Viewport;

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    CheckIn(&'a str),
    CheckOut(&'a str),
    Guests(&'a str),
    Name(&'a str),
    Phone(&'a str),
    Width(u32),
    Book,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));
        match verb {
            "checkin" => Command::CheckIn(rest),
            "checkout" => Command::CheckOut(rest),
            "guests" => Command::Guests(rest),
            "name" => Command::Name(rest),
            "phone" => Command::Phone(rest),
            "width" => match rest.parse() {
                Ok(width) => Command::Width(width),
                Err(_) => Command::Unknown(line),
            },
            "book" => Command::Book,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line),
        }
    }
}

static HELP: &str = "\
commands:
  checkin YYYY-MM-DD   checkout YYYY-MM-DD   guests N
  name TEXT            phone TEXT            width PX
  book                 quit";

pub async fn run(app: AppModule, place_id: String) -> error_stack::Result<(), KernelError> {
    let mut form = app.open_booking_form(GetPlaceDto { id: place_id }).await?;
    let viewport = Viewport::new(*app.display().viewport_width());
    let images = ImageResolver::new(app.display().uploads_base_url().clone());

    print_listing(&form, &images);
    println!("{HELP}\n");
    print_widget(&form, &viewport);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .change_context(KernelError::Internal)
        .attach_printable("Failed to read from stdin")?
    {
        match Command::parse(&line) {
            Command::CheckIn(raw) => form.set_check_in(raw),
            Command::CheckOut(raw) => form.set_check_out(raw),
            Command::Guests(raw) => {
                if !form.set_guests(raw) {
                    println!("! {raw:?} is not a number of guests");
                }
            }
            Command::Name(raw) => form.set_name(raw),
            Command::Phone(raw) => form.set_phone(raw),
            Command::Width(width) => viewport.resize(width),
            Command::Book => {
                if let Err(report) = app.submit_booking(&mut form).await {
                    tracing::debug!("booking failed: {report:?}");
                    println!("! {}", ErrorBanner::from(&report));
                }
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::Unknown(line) => {
                println!("unknown command: {line} (try `help`)");
                continue;
            }
        }

        if let Some(redirect) = print_widget(&form, &viewport) {
            let nav = AccountNav::mount(&viewport);
            println!("{}", nav.render(&redirect));
            break;
        }
    }
    Ok(())
}

fn print_listing(form: &BookingForm, images: &ImageResolver) {
    print!("{}", ListingPresenter::new(images).emit(form.place().clone()));
}

/// Draws the widget and returns where to navigate once it has finished.
fn print_widget(form: &BookingForm, viewport: &Viewport) -> Option<String> {
    let view = BookingWidgetPresenter::new(viewport.width()).emit(form);
    println!("{view}\n");
    match view {
        BookingWidgetView::Redirect { to } => Some(to),
        BookingWidgetView::Panel(_) => None,
    }
}
