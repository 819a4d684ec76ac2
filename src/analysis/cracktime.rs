// src/analysis/cracktime.rs

/// Guesses per second assumed for the simulated attacker.
const ATTEMPTS_PER_SECOND: f64 = 10_000_000_000.0;

const SECONDS_PER_WEEK: f64 = 604_800.0;
const SECONDS_PER_MONTH: f64 = 2_629_746.0;
const SECONDS_PER_YEAR: f64 = 31_556_952.0;
const UNIVERSE_AGE_YEARS: f64 = 13_800_000_000.0;

/// Render the expected time to find a password in a `2^bits` keyspace at a
/// fixed throughput, assuming half the keyspace must be tried on average.
///
/// This is a display aid for comparing strength estimates; it measures
/// nothing about any real adversary.
pub fn simulate(bits: u32) -> String {
    let combinations = 2f64.powi(bits as i32);
    let seconds = combinations / 2.0 / ATTEMPTS_PER_SECOND;

    if seconds < 60.0 {
        format!("{} secondes", seconds.round())
    } else if seconds < 3600.0 {
        format!("{} minutes", (seconds / 60.0).round())
    } else if seconds < 86400.0 {
        format!("{} heures", (seconds / 3600.0).round())
    } else if seconds < SECONDS_PER_WEEK {
        format!("{} jours", (seconds / 86400.0).round())
    } else if seconds < SECONDS_PER_MONTH {
        format!("{} semaines", (seconds / SECONDS_PER_WEEK).round())
    } else if seconds < SECONDS_PER_YEAR {
        format!("{} mois", (seconds / SECONDS_PER_MONTH).round())
    } else if seconds < SECONDS_PER_YEAR * 10.0 {
        let years = (seconds / SECONDS_PER_YEAR).round();
        format!("{} {}", years, if years == 1.0 { "an" } else { "ans" })
    } else {
        let years = seconds / SECONDS_PER_YEAR;
        if years < 1_000.0 {
            format!("{} ans", years.round())
        } else if years < 1_000_000.0 {
            format!("{} milliers d'années", (years / 1_000.0).round())
        } else if years < 1_000_000_000.0 {
            format!("{} millions d'années", (years / 1_000_000.0).round())
        } else if years < 1_000_000_000_000.0 {
            format!("{} milliards d'années", (years / 1_000_000_000.0).round())
        } else {
            format!("{} × l'âge de l'univers", (years / UNIVERSE_AGE_YEARS).round())
        }
    }
}
