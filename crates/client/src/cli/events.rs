//! Events CLI commands.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use lexscopic_core::events::{normalize_tags, DateMode, FilterCriteria};

use crate::client::events::SubmitEventRequest;

/// Event listing commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available events actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List visible events, soonest first.
    List(FilterArgs),
    /// Show visible events grouped into featured and tag sections.
    Sections(FilterArgs),
    /// Get an event by ID.
    Get {
        /// Event ID.
        id: String,
    },
    /// Print the "Add to Google Calendar" link for an event.
    Calendar {
        /// Event ID.
        id: String,
    },
    /// Submit a new event.
    Submit(SubmitArgs),
}

/// Date filter choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DateArg {
    #[default]
    Any,
    Today,
    Weekend,
}

/// Filter options shared by `list` and `sections`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Search text matched against title, description, venue and neighborhood.
    #[arg(long, short)]
    pub query: Option<String>,

    /// Maximum price in dollars. 0 lists free events only.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Date filter.
    #[arg(long, value_enum, default_value = "any", conflicts_with = "on")]
    pub date: DateArg,

    /// Only events on this date (YYYY-MM-DD).
    #[arg(long)]
    pub on: Option<NaiveDate>,

    /// Required tag. Repeat to require several.
    #[arg(long = "tag", short)]
    pub tags: Vec<String>,
}

impl FilterArgs {
    /// Converts the options into filter criteria.
    pub fn to_criteria(&self) -> FilterCriteria {
        let date_mode = match (self.on, self.date) {
            (Some(date), _) => DateMode::On(date),
            (None, DateArg::Any) => DateMode::Any,
            (None, DateArg::Today) => DateMode::Today,
            (None, DateArg::Weekend) => DateMode::Weekend,
        };

        let mut criteria = FilterCriteria::new()
            .with_query(self.query.clone().unwrap_or_default())
            .with_date_mode(date_mode);
        if let Some(max_price) = self.max_price {
            criteria = criteria.with_max_price(max_price);
        }
        for tag in normalize_tags(&self.tags) {
            criteria = criteria.with_tag(tag);
        }
        criteria
    }
}

/// Options for `submit`. Omitted fields take the server's form defaults.
#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    /// Event title.
    #[arg(long)]
    pub title: String,
    /// Event date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// Start time, e.g. "6:00 PM".
    #[arg(long)]
    pub start_time: Option<String>,
    /// End time, e.g. "8:00 PM".
    #[arg(long)]
    pub end_time: Option<String>,
    /// Venue name.
    #[arg(long)]
    pub venue: Option<String>,
    /// Neighborhood.
    #[arg(long)]
    pub neighborhood: Option<String>,
    /// Ticket price in dollars.
    #[arg(long)]
    pub price: Option<f64>,
    /// Tag. Repeat for several.
    #[arg(long = "tag", short)]
    pub tags: Vec<String>,
    /// Description.
    #[arg(long)]
    pub description: Option<String>,
    /// Event link.
    #[arg(long)]
    pub url: Option<String>,
    /// Image URL.
    #[arg(long)]
    pub image: Option<String>,
}

impl From<SubmitArgs> for SubmitEventRequest {
    fn from(args: SubmitArgs) -> Self {
        Self {
            title: args.title,
            date: args.date,
            start_time: args.start_time,
            end_time: args.end_time,
            venue: args.venue,
            neighborhood: args.neighborhood,
            price: args.price,
            tags: (!args.tags.is_empty()).then(|| args.tags.join(",")),
            description: args.description,
            url: args.url,
            image: args.image,
        }
    }
}
