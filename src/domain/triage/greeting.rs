//! Greeting detection and the personalized greeting reply.

use chrono::{NaiveTime, Timelike};

use super::Taxonomy;

/// Part of the day used to pick the salutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Derives the time of day from a local wall-clock time.
    ///
    /// Before noon is morning, before 17:00 is afternoon, the rest is
    /// evening.
    pub fn from_time(time: NaiveTime) -> Self {
        if time.hour() < 12 {
            TimeOfDay::Morning
        } else if time.hour() < 17 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }

    /// Returns the salutation for this time of day.
    pub fn salutation(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Good morning",
            TimeOfDay::Afternoon => "Good afternoon",
            TimeOfDay::Evening => "Good evening",
        }
    }
}

/// True iff the normalized message contains any greeting phrase.
///
/// Substring containment, same as domain matching; checked before the
/// matcher runs, so a greeting short-circuits domain detection entirely.
pub fn is_greeting(taxonomy: &Taxonomy, message: &str) -> bool {
    taxonomy
        .greeting_phrases()
        .iter()
        .any(|phrase| message.contains(phrase))
}

/// Builds the personalized greeting reply.
pub fn greeting_reply(display_name: &str, time_of_day: TimeOfDay) -> String {
    format!(
        "{}, {}! \u{1F44B}\n\n\
         Welcome to Nyaya, your legal assistant for Indian law matters.\n\n\
         I can help you with:\n\
         \u{2022} Property disputes and real estate issues\n\
         \u{2022} Criminal matters and FIR guidance\n\
         \u{2022} Family law and matrimonial cases\n\
         \u{2022} Consumer complaints and refunds\n\
         \u{2022} Employment and workplace issues\n\
         \u{2022} Tax notices and GST matters\n\
         \u{2022} Cyber crimes and online fraud\n\
         \u{2022} Environmental violations\n\
         \u{2022} Intellectual property rights\n\n\
         Simply describe your legal concern, and I'll guide you with relevant laws, \
         procedures, and landmark cases specific to Indian jurisdiction.",
        time_of_day.salutation(),
        display_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greets(message: &str) -> bool {
        is_greeting(Taxonomy::shared(), message)
    }

    #[test]
    fn detects_plain_greetings() {
        assert!(greets("hello"));
        assert!(greets("namaste"));
        assert!(greets("good morning"));
    }

    #[test]
    fn detects_greeting_inside_sentence() {
        assert!(greets("hello, i have a question"));
    }

    #[test]
    fn substring_containment_also_fires_inside_words() {
        // Known false-positive source preserved on purpose: "hi" is a
        // substring of "child".
        assert!(greets("custody of my child"));
    }

    #[test]
    fn non_greeting_text_is_not_detected() {
        assert!(!greets("fir for theft"));
        assert!(!greets("tax notice arrived"));
    }

    #[test]
    fn time_of_day_boundaries() {
        assert_eq!(
            TimeOfDay::from_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()),
            TimeOfDay::Morning
        );
        assert_eq!(
            TimeOfDay::from_time(NaiveTime::from_hms_opt(11, 59, 59).unwrap()),
            TimeOfDay::Morning
        );
        assert_eq!(
            TimeOfDay::from_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            TimeOfDay::Afternoon
        );
        assert_eq!(
            TimeOfDay::from_time(NaiveTime::from_hms_opt(16, 59, 59).unwrap()),
            TimeOfDay::Afternoon
        );
        assert_eq!(
            TimeOfDay::from_time(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
            TimeOfDay::Evening
        );
        assert_eq!(
            TimeOfDay::from_time(NaiveTime::from_hms_opt(23, 30, 0).unwrap()),
            TimeOfDay::Evening
        );
    }

    #[test]
    fn reply_starts_with_salutation_and_name() {
        let reply = greeting_reply("Asha", TimeOfDay::Morning);
        assert!(reply.starts_with("Good morning, Asha!"));
        assert!(reply.contains("Welcome to Nyaya"));
    }

    #[test]
    fn reply_lists_supported_areas() {
        let reply = greeting_reply("Ravi", TimeOfDay::Evening);
        assert!(reply.starts_with("Good evening, Ravi!"));
        assert!(reply.contains("Criminal matters and FIR guidance"));
        assert!(reply.contains("Tax notices and GST matters"));
    }
}
