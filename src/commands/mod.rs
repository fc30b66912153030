pub mod spec;

use self::spec::{Choice, Command, CommandOption};

/// How many days back the `days` option lets the user look
const MAX_DAYS: u32 = 7;

/// Generate the ordered choice list 1..=max_days for a `days` option
/// An input of 0 yields an empty list
pub fn days_choices(max_days: u32) -> Vec<Choice> {
    (1..=max_days)
        .map(|day| Choice::int(&day.to_string(), i64::from(day)))
        .collect()
}

fn user_option() -> CommandOption {
    CommandOption::string(
        "user",
        "The league of legends username for the user.",
        true,
    )
    .autocomplete()
}

fn days_option() -> CommandOption {
    CommandOption::integer("days", "Over the last how many days.", true)
        .choices(days_choices(MAX_DAYS))
}

/// The full command set to register, in the order it is sent
pub fn definitions() -> Vec<Command> {
    vec![
        Command::chat_input(
            "played",
            "Work out how much time someone has spent playing League of Legends recently.",
        )
        .option(user_option())
        .option(days_option()),
        Command::chat_input(
            "ranked",
            "Work out how much time someone has spent in ranked games recently.",
        )
        .option(user_option())
        .option(days_option()),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::spec::Choice;
    use super::{days_choices, definitions};

    #[test]
    fn days_choices_counts_from_one_to_n() {
        for n in 1..=20u32 {
            let choices = days_choices(n);
            assert_eq!(choices.len(), n as usize);
            for (index, choice) in choices.iter().enumerate() {
                let day = index as i64 + 1;
                assert_eq!(*choice, Choice::int(&day.to_string(), day));
            }
        }
    }

    #[test]
    fn days_choices_for_a_week() {
        assert_eq!(
            days_choices(7),
            vec![
                Choice::int("1", 1),
                Choice::int("2", 2),
                Choice::int("3", 3),
                Choice::int("4", 4),
                Choice::int("5", 5),
                Choice::int("6", 6),
                Choice::int("7", 7),
            ]
        );
    }

    #[test]
    fn days_choices_of_zero_is_empty() {
        assert!(days_choices(0).is_empty());
    }

    #[test]
    fn definitions_serialize_with_discord_key_names() {
        let value = serde_json::to_value(definitions()).unwrap();

        let played = &value[0];
        assert_eq!(played["name"], "played");
        assert_eq!(played["type"], 1);

        let user = &played["options"][0];
        assert_eq!(user["name"], "user");
        assert_eq!(user["type"], 3);
        assert_eq!(user["required"], true);
        assert_eq!(user["autocomplete"], true);
        assert!(user.get("choices").is_none());

        let days = &played["options"][1];
        assert_eq!(days["name"], "days");
        assert_eq!(days["type"], 4);
        assert!(days.get("autocomplete").is_none());
        assert_eq!(days["choices"][6], json!({"name": "7", "value": 7}));
    }

    #[test]
    fn option_names_are_unique_within_each_command() {
        for command in definitions() {
            let mut names: Vec<&str> = command.options.iter().map(|o| o.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), command.options.len());
        }
    }
}
