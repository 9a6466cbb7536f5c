use std::fmt::{self, Display};

use jiff::Timestamp;
use owo_colors::{OwoColorize, Style};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// The style of a `sver` logging line, e.g. `DEBUG compare: 1.0.0 < 1.0.1 is true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SverFormat {
    pub display_timestamp: bool,
    pub display_level: bool,
    pub display_target: bool,
    pub show_spans: bool,
}

impl Default for SverFormat {
    /// Regardless of the tracing level, show messages without any adornment.
    fn default() -> Self {
        Self {
            display_timestamp: false,
            display_level: true,
            display_target: false,
            show_spans: false,
        }
    }
}

impl SverFormat {
    /// The format for `-vv`: timestamps, targets and the enclosing spans of every event.
    pub fn detailed() -> Self {
        Self {
            display_timestamp: true,
            display_level: true,
            display_target: true,
            show_spans: true,
        }
    }
}

/// Write `value` followed by a space, styled only when the writer supports ANSI escapes.
fn write_field<T: Display>(writer: &mut Writer<'_>, value: T, style: Style) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "{} ", value.style(style))
    } else {
        write!(writer, "{value} ")
    }
}

/// The color `tracing` itself uses for each level.
fn level_style(level: Level) -> Style {
    match level {
        Level::TRACE => Style::new().purple(),
        Level::DEBUG => Style::new().blue(),
        Level::INFO => Style::new().green(),
        Level::WARN => Style::new().yellow(),
        Level::ERROR => Style::new().red(),
    }
}

/// Modeled on the `Full` format of `tracing-subscriber`, see
/// <https://docs.rs/tracing-subscriber/0.3.18/src/tracing_subscriber/fmt/format/mod.rs.html#1026-1156>
impl<S, N> FormatEvent<S, N> for SverFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if self.display_timestamp {
            write_field(&mut writer, Timestamp::now(), Style::new().dimmed())?;
        }
        if self.display_level {
            write_field(&mut writer, meta.level(), level_style(*meta.level()))?;
        }
        if self.display_target {
            write_field(&mut writer, meta.target(), Style::new().dimmed())?;
        }

        if self.show_spans {
            // Spans from the outermost to the event's own, e.g. `compare:parse:`.
            let scope = event
                .parent()
                .and_then(|id| ctx.span(id))
                .or_else(|| ctx.lookup_current())
                .into_iter()
                .flat_map(|span| span.scope().from_root())
                .map(|span| span.metadata().name())
                .collect::<Vec<_>>();
            if !scope.is_empty() {
                let scope = format!("{}:", scope.join(":"));
                write_field(&mut writer, scope, Style::new().bold())?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
