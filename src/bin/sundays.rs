extern crate sunday_schedule as lib;

use flexi_logger::{FileSpec, Logger};
use lib::{CalendarDate, Clock, Destination, FixedClock, Locale, Schedule, ScheduleConfig, SystemClock};
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sundays",
    author = "Tyler Smith <mail@tcry.pt>",
    about = "Lists the Sundays of the season and the page each one opens."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "today", help = "use this date (YYYY-MM-DD) instead of the system clock")]
    pub today: Option<CalendarDate>,

    #[structopt(short = "l", long = "locale", help = "label language: korean or english")]
    pub locale: Option<Locale>,

    #[structopt(long = "json", help = "print the schedule as JSON")]
    pub json: bool,

    #[structopt(
        short = "s",
        long = "select",
        help = "print the page for this Sunday (YYYY-MM-DD) instead of the schedule"
    )]
    pub select: Option<CalendarDate>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "info" };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    let config = ScheduleConfig::load(args.configfile.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &config, &mut out)
}

/// Prints the schedule, or the page of `--select`, to `out`.
fn run<W: Write>(args: &Args, config: &ScheduleConfig, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let locale = args.locale.unwrap_or(config.locale);

    let clock: Box<dyn Clock> = match args.today {
        Some(today) => Box::new(FixedClock::new(today)),
        None => Box::new(SystemClock),
    };

    let schedule = Schedule::from_clock(config, clock.as_ref());
    debug!(
        "Season {} to {}, today is {}",
        schedule.season_start(),
        schedule.target(),
        schedule.today()
    );

    if let Some(date) = args.select {
        let destination = schedule.select(date, &mut |_: &Destination| {})?;
        writeln!(out, "{destination}")?;
        return Ok(());
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &schedule)?;
        writeln!(out)?;
    } else {
        lib::render::render_text(&schedule, locale, out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::{MonthDay, ScheduleError};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn args(argv: &[&str]) -> Args {
        Args::from_iter(std::iter::once("sundays").chain(argv.iter().copied()))
    }

    fn short_season(locale: Locale) -> ScheduleConfig {
        ScheduleConfig {
            season_start: "2025-11-04".parse().unwrap(),
            target: MonthDay::new(11, 10).unwrap(),
            locale,
        }
    }

    fn run_to_string(args: &Args, config: &ScheduleConfig) -> String {
        let mut out = Vec::new();
        run(args, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_select_prints_destination() {
        let args = args(&["--today", "2025-12-14", "--select", "2025-12-14"]);
        let output = run_to_string(&args, &ScheduleConfig::default());
        assert_eq!(output, "12_14.html\n");
    }

    #[test]
    fn test_select_unknown_date_fails() {
        let args = args(&["--today", "2025-12-14", "--select", "2025-12-15"]);
        let mut out = Vec::new();

        let err = run(&args, &ScheduleConfig::default(), &mut out).unwrap_err();
        let err = err.downcast_ref::<ScheduleError>().unwrap();
        assert_eq!(*err, ScheduleError::NotInSchedule("2025-12-15".parse().unwrap()));
        assert!(out.is_empty());
    }

    #[test]
    fn test_select_reports_write_failure() {
        let args = args(&["--today", "2025-12-14", "--select", "2025-12-14"]);
        let result = run(&args, &ScheduleConfig::default(), &mut BrokenPipe);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_reports_write_failure() {
        let args = args(&["--today", "2025-12-14"]);
        let result = run(&args, &ScheduleConfig::default(), &mut BrokenPipe);
        assert!(result.is_err());
    }

    #[test]
    fn test_locale_from_config() {
        let args = args(&["--today", "2025-11-04"]);
        let output = run_to_string(&args, &short_season(Locale::English));
        assert_eq!(output, "November 2025\n  Sun, Nov 9 -> 11_09.html (last)\n");
    }

    #[test]
    fn test_locale_flag_overrides_config() {
        let args = args(&["--today", "2025-11-04", "--locale", "korean"]);
        let output = run_to_string(&args, &short_season(Locale::English));
        assert_eq!(output, "2025년 11월\n  11월 9일(일) -> 11_09.html (last)\n");
    }

    #[test]
    fn test_json_output() {
        let args = args(&["--today", "2025-11-09", "--json"]);
        let output = run_to_string(&args, &short_season(Locale::Korean));
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["today"], "2025-11-09");
        assert_eq!(json["groups"][0]["entries"][0]["is_today"], true);
    }
}
