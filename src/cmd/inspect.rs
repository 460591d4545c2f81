//! `evbus inspect`: parses events as delivered by the bus.

use std::{io::Read, path::PathBuf};

use clap::Parser;

use super::Error;
use crate::models::Event;

/// Arguments of the `inspect` subcommand.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// File holding one or more concatenated events. Reads stdin when absent.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Prints a summary and the detail of every event in the input.
pub fn execute(args: InspectArgs) -> Result<(), Error> {
    let raw = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let events = parse_events(&raw)?;
    tracing::debug!(count = events.len(), "Parsed events.");

    for event in &events {
        println!("{}", summarize(event));
        println!("{}", serde_json::to_string_pretty(&event.detail)?);
    }

    Ok(())
}

/// Parses a stream of whitespace-separated event objects.
pub fn parse_events(raw: &str) -> Result<Vec<Event>, Error> {
    serde_json::Deserializer::from_str(raw)
        .into_iter::<Event>()
        .map(|event| event.map_err(Error::from))
        .collect()
}

/// One line describing an event.
pub fn summarize(event: &Event) -> String {
    format!(
        "{} source={} detail-type={} time={} resources={}",
        event.id,
        event.source,
        event.detail_type,
        event.time.to_rfc3339(),
        event.resources.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_json(id: &str) -> String {
        format!(
            r#"{{"version":"0","id":"{id}","detail-type":"OrderCreated","source":"orders",
            "account":"123456789012","time":"2024-05-01T12:00:00Z","region":"eu-west-1",
            "resources":["arn:aws:s3:::bucket"],"detail":{{"orderId":"123"}}}}"#
        )
    }

    #[test]
    fn test_parse_multiple_events() {
        let raw = format!("{}\n{}\n", event_json("a"), event_json("b"));

        let events = parse_events(&raw).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "a");
        assert_eq!(events[1].id, "b");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_events("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_event() {
        assert!(matches!(parse_events(r#"{"id": "a"}"#), Err(Error::Json(_))));
    }

    #[test]
    fn test_summarize() {
        let events = parse_events(&event_json("abc")).unwrap();

        assert_eq!(
            summarize(&events[0]),
            r#"abc source=orders detail-type=OrderCreated time=2024-05-01T12:00:00+00:00 resources=1"#
        );
    }

    #[test]
    fn test_execute_reads_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("events.json");
        std::fs::write(&path, event_json("x")).unwrap();

        execute(InspectArgs { file: Some(path) }).unwrap();
    }
}
