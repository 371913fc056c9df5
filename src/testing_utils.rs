use crate::data_fetcher::models::{EventRecord, columns};
use crate::error::AppError;
use crate::pipeline::dates::parse_date;
use chrono::Datelike;

const MONTH_NAMES: [&str; 12] = [
    "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september",
    "oktober", "november", "december",
];

/// Test utilities for creating mock records and CSV text
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Starts an event record. When `date_from` parses, the record's year,
    /// month number and month name are filled in to match it, the way the
    /// sheet's formula columns would. An empty `season` leaves it unset.
    pub fn event(name: &str, season: &str, date_from: &str) -> EventBuilder {
        let mut record = EventRecord {
            name: Some(name.to_string()),
            season: (!season.is_empty()).then(|| season.to_string()),
            date_from: Some(date_from.to_string()),
            ..Default::default()
        };

        if let Some(date) = parse_date(date_from) {
            record.year = Some(date.year().to_string());
            record.month_number = Some(format!("{:02}", date.month()));
            record.month_name = Some(MONTH_NAMES[date.month0() as usize].to_string());
        }

        EventBuilder { record }
    }

    /// Builds CSV text with the events sheet's core header row and one line per record.
    pub fn events_csv(records: &[EventRecord]) -> Result<String, AppError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            columns::SEASON,
            columns::EVENT_TYPE,
            columns::PLACE,
            columns::FREE_FROM_SCHOOL,
            columns::NAME,
            columns::DATE_FROM,
            columns::DATE_TO,
            columns::YEAR,
            columns::MONTH_NUMBER,
            columns::MONTH_NAME,
            columns::COST,
            columns::PAYMENT_DEADLINE,
            columns::PAYEE,
        ])?;

        for r in records {
            let cells = [
                &r.season,
                &r.event_type,
                &r.place,
                &r.free_from_school,
                &r.name,
                &r.date_from,
                &r.date_to,
                &r.year,
                &r.month_number,
                &r.month_name,
                &r.cost,
                &r.payment_deadline,
                &r.payee,
            ];
            writer.write_record(cells.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Fluent builder returned by [`TestDataBuilder::event`]
pub struct EventBuilder {
    record: EventRecord,
}

impl EventBuilder {
    pub fn with_type(mut self, event_type: &str) -> Self {
        self.record.event_type = Some(event_type.to_string());
        self
    }

    pub fn with_place(mut self, place: &str) -> Self {
        self.record.place = Some(place.to_string());
        self
    }

    pub fn with_school(mut self, value: &str) -> Self {
        self.record.free_from_school = Some(value.to_string());
        self
    }

    pub fn with_date_to(mut self, date_to: &str) -> Self {
        self.record.date_to = Some(date_to.to_string());
        self
    }

    /// Overrides the year, month number and month name cells.
    pub fn with_month(mut self, year: &str, month_number: &str, month_name: &str) -> Self {
        self.record.year = Some(year.to_string());
        self.record.month_number = Some(month_number.to_string());
        self.record.month_name = Some(month_name.to_string());
        self
    }

    /// Clears the month number cell, as in a row where the formula column is blank.
    pub fn without_month(mut self) -> Self {
        self.record.month_number = None;
        self
    }

    pub fn with_cost(mut self, cost: &str) -> Self {
        self.record.cost = (!cost.is_empty()).then(|| cost.to_string());
        self
    }

    pub fn with_payment(mut self, deadline: &str, payee: &str) -> Self {
        self.record.payment_deadline = Some(deadline.to_string());
        self.record.payee = Some(payee.to_string());
        self
    }

    pub fn with_lodging(mut self, kind: &str, name: &str, address: &str) -> Self {
        self.record.lodging_type = Some(kind.to_string());
        self.record.lodging_name = Some(name.to_string());
        self.record.lodging_address = Some(address.to_string());
        self
    }

    pub fn with_website(mut self, url: &str) -> Self {
        self.record.website = Some(url.to_string());
        self
    }

    pub fn build(self) -> EventRecord {
        self.record
    }
}
