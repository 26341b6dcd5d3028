use std::str::FromStr;

use docnote_core::models::analytics::TimeRange;
use docnote_core::recent::{NoteFilter, NoteSort};
use docnote_export::format::ExportFormat;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Back,
    Home,
    Patients { query: String },
    Patient { id: String },
    Recent { filter: NoteFilter, sort: NoteSort },
    Analytics { range: TimeRange },
    Note { id: String },
    NewNote,
    Record,
    Say(String),
    Type(String),
    Save,
    Pick { id: String },
    Cancel,
    Export(Option<ExportFormat>),
    NewPatient,
    Set { field: FormField, value: String },
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Sport,
    Team,
    Age,
    Gender,
    ContactNumber,
    EmergencyContact,
}

impl FromStr for FormField {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "sport" => Ok(FormField::Sport),
            "team" => Ok(FormField::Team),
            "age" => Ok(FormField::Age),
            "gender" => Ok(FormField::Gender),
            "contact" => Ok(FormField::ContactNumber),
            "emergency" => Ok(FormField::EmergencyContact),
            other => Err(eyre::eyre!(
                "unknown field {other:?} (name, sport, team, age, gender, contact, emergency)"
            )),
        }
    }
}

impl FromStr for Command {
    type Err = eyre::Report;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "back" => Command::Back,
            "home" => Command::Home,
            "patients" => Command::Patients {
                query: rest.to_string(),
            },
            "patient" => Command::Patient {
                id: required(rest, "patient <id>")?,
            },
            "recent" => parse_recent(rest)?,
            "analytics" => Command::Analytics {
                range: parse_range(rest)?,
            },
            "note" => Command::Note {
                id: required(rest, "note <id>")?,
            },
            "new-note" => Command::NewNote,
            "record" => Command::Record,
            "say" => Command::Say(required(rest, "say <text>")?),
            "type" => Command::Type(rest.to_string()),
            "save" => Command::Save,
            "pick" => Command::Pick {
                id: required(rest, "pick <id>")?,
            },
            "cancel" => Command::Cancel,
            "export" if rest.is_empty() => Command::Export(None),
            "export" => Command::Export(Some(rest.parse()?)),
            "new-patient" => Command::NewPatient,
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                Command::Set {
                    field: field.parse()?,
                    value: value.trim().to_string(),
                }
            }
            "submit" => Command::Submit,
            "" => return Err(eyre::eyre!("empty command")),
            other => return Err(eyre::eyre!("unknown command {other:?}, try `help`")),
        };
        Ok(command)
    }
}

fn required(rest: &str, usage: &str) -> eyre::Result<String> {
    if rest.is_empty() {
        return Err(eyre::eyre!("usage: {usage}"));
    }
    Ok(rest.to_string())
}

fn parse_recent(rest: &str) -> eyre::Result<Command> {
    let mut filter = NoteFilter::All;
    let mut sort = NoteSort::Latest;
    for token in rest.split_whitespace() {
        match token {
            "all" => filter = NoteFilter::All,
            "week" => filter = NoteFilter::ThisWeek,
            "month" => filter = NoteFilter::ThisMonth,
            "latest" => sort = NoteSort::Latest,
            "oldest" => sort = NoteSort::Oldest,
            other => return Err(eyre::eyre!("unknown recent option {other:?}")),
        }
    }
    Ok(Command::Recent { filter, sort })
}

fn parse_range(rest: &str) -> eyre::Result<TimeRange> {
    match rest {
        "" | "week" => Ok(TimeRange::Week),
        "month" => Ok(TimeRange::Month),
        "year" => Ok(TimeRange::Year),
        other => Err(eyre::eyre!("unknown range {other:?} (week, month, year)")),
    }
}
