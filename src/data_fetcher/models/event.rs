use serde::{Deserialize, Deserializer, Serialize};

/// Column headers of the published sheets.
///
/// These are the literal labels of the spreadsheet's header row and form the
/// contract with the data source.
pub mod columns {
    pub const SEASON: &str = "Säsong";
    pub const EVENT_TYPE: &str = "Typ av händelse";
    pub const PLACE: &str = "Plats";
    pub const FREE_FROM_SCHOOL: &str = "Ledig från skolan?";
    pub const NAME: &str = "Namn på händelse";
    pub const DATE_FROM: &str = "Datum från";
    pub const DATE_TO: &str = "Datum till";
    pub const YEAR: &str = "År";
    pub const MONTH_NUMBER: &str = "Månadsnummer";
    pub const MONTH_NAME: &str = "Månadsnamn";
    pub const COST: &str = "Kostnad per spelare";
    pub const PAYMENT_DEADLINE: &str = "Sista betalningsdag";
    pub const PAYEE: &str = "Betalningsmottagare";

    /// Columns a sheet must carry for its rows to be usable at all
    pub const REQUIRED: &[&str] = &[NAME];
}

/// One row of the events (or budget) sheet.
///
/// Every field is optional: blank cells become `None`. Only `season`,
/// `event_type`, `place`, `free_from_school`, the date fields and the
/// calendar fields take part in filtering and grouping; the rest is
/// passthrough payload for the event cards and the budget table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename(deserialize = "Säsong"), default, deserialize_with = "blank_as_none")]
    pub season: Option<String>,
    #[serde(rename(deserialize = "Typ av händelse"), default, deserialize_with = "blank_as_none")]
    pub event_type: Option<String>,
    #[serde(rename(deserialize = "Plats"), default, deserialize_with = "blank_as_none")]
    pub place: Option<String>,
    #[serde(rename(deserialize = "Ledig från skolan?"), default, deserialize_with = "blank_as_none")]
    pub free_from_school: Option<String>,
    #[serde(rename(deserialize = "Namn på händelse"), default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(rename(deserialize = "Datum från"), default, deserialize_with = "blank_as_none")]
    pub date_from: Option<String>,
    #[serde(rename(deserialize = "Datum till"), default, deserialize_with = "blank_as_none")]
    pub date_to: Option<String>,
    #[serde(rename(deserialize = "År"), default, deserialize_with = "blank_as_none")]
    pub year: Option<String>,
    #[serde(rename(deserialize = "Månadsnummer"), default, deserialize_with = "blank_as_none")]
    pub month_number: Option<String>,
    #[serde(rename(deserialize = "Månadsnamn"), default, deserialize_with = "blank_as_none")]
    pub month_name: Option<String>,

    #[serde(rename(deserialize = "Kostnad per spelare"), default, deserialize_with = "blank_as_none")]
    pub cost: Option<String>,
    #[serde(rename(deserialize = "Sista betalningsdag"), default, deserialize_with = "blank_as_none")]
    pub payment_deadline: Option<String>,
    #[serde(rename(deserialize = "Betalningsmottagare"), default, deserialize_with = "blank_as_none")]
    pub payee: Option<String>,

    #[serde(rename(deserialize = "Ledighet"), default, deserialize_with = "blank_as_none")]
    pub leave_notes: Option<String>,
    #[serde(rename(deserialize = "Övrig information"), default, deserialize_with = "blank_as_none")]
    pub other_info: Option<String>,

    #[serde(rename(deserialize = "Samling Härnösand"), default, deserialize_with = "blank_as_none")]
    pub meet_home: Option<String>,
    #[serde(rename(deserialize = "Samling på plats"), default, deserialize_with = "blank_as_none")]
    pub meet_on_site: Option<String>,
    #[serde(rename(deserialize = "Resväg"), default, deserialize_with = "blank_as_none")]
    pub route: Option<String>,
    #[serde(rename(deserialize = "Färdsätt"), default, deserialize_with = "blank_as_none")]
    pub transport: Option<String>,

    #[serde(rename(deserialize = "Typ av boende"), default, deserialize_with = "blank_as_none")]
    pub lodging_type: Option<String>,
    #[serde(rename(deserialize = "Namn på boende"), default, deserialize_with = "blank_as_none")]
    pub lodging_name: Option<String>,
    #[serde(rename(deserialize = "Tillgång till boende"), default, deserialize_with = "blank_as_none")]
    pub lodging_access: Option<String>,
    #[serde(rename(deserialize = "Adress till boende"), default, deserialize_with = "blank_as_none")]
    pub lodging_address: Option<String>,

    #[serde(rename(deserialize = "Länk till hemsida"), default, deserialize_with = "blank_as_none")]
    pub website: Option<String>,
    #[serde(rename(deserialize = "Länk till bilder"), default, deserialize_with = "blank_as_none")]
    pub photos: Option<String>,
    #[serde(rename(deserialize = "Länk till boendes hemsida"), default, deserialize_with = "blank_as_none")]
    pub lodging_website: Option<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

impl EventRecord {
    /// Display name, or an empty string for rows without one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// End of the event's date range: `date_to`, falling back to `date_from`.
    pub fn end_date(&self) -> Option<&str> {
        self.date_to.as_deref().or(self.date_from.as_deref())
    }

    /// `true` when the free-from-school column says "ja" (any case).
    pub fn is_free_from_school(&self) -> bool {
        self.free_from_school
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("ja"))
    }

    /// `true` when the free-from-school column says "nej" (any case).
    pub fn is_not_free_from_school(&self) -> bool {
        self.free_from_school
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("nej"))
    }
}

/// Returns the value only when it is a usable web link.
pub fn http_link(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| v.starts_with("http"))
}
