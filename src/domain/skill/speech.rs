//! Everything the skill says, with the skill name filled in.

use super::SkillResponse;
use crate::domain::facts::{FactNumber, FACT_COUNT};

const PLAY_OR_QUIT: &str = "Say yes to hear a cat fact or no to quit.";
const RESTART_OR_QUIT: &str = "Say start a new game to hear cat facts or no to quit.";
const NO_MORE_FACTS: &str =
    "There are no more cat facts for me to tell you. Start a new game to rehear the facts or say no to quit.";

/// Response templates for one skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    skill_name: String,
}

impl Speech {
    pub fn new(skill_name: impl Into<String>) -> Self {
        Self {
            skill_name: skill_name.into(),
        }
    }

    /// Greeting when the user can keep playing.
    pub fn welcome(&self) -> SkillResponse {
        SkillResponse::ask(
            format!("Welcome to {}. Want to play?", self.skill_name),
            "Say yes to play the game or no to quit.",
        )
    }

    /// Greeting for a returning user who has heard every fact.
    pub fn welcome_exhausted(&self) -> SkillResponse {
        SkillResponse::ask(
            format!("Welcome to {}. {}", self.skill_name, NO_MORE_FACTS),
            RESTART_OR_QUIT,
        )
    }

    pub fn numbered_fact(&self, number: FactNumber, fact: &str) -> SkillResponse {
        SkillResponse::ask(
            format!(
                "Here's cat fact number {}: {} Want to hear another fact?",
                number, fact
            ),
            PLAY_OR_QUIT,
        )
    }

    pub fn fact_number_out_of_range(&self) -> SkillResponse {
        SkillResponse::ask(
            format!(
                "I only know ten facts. Try saying a number between 1 and {} to get a fact.",
                FACT_COUNT
            ),
            format!("Say a number between 1 and {} to get a fact.", FACT_COUNT),
        )
    }

    pub fn next_fact(&self, fact: &str) -> SkillResponse {
        SkillResponse::ask(
            format!("Here's a cat fact: {} Want to hear another fact?", fact),
            PLAY_OR_QUIT,
        )
    }

    pub fn no_more_facts(&self) -> SkillResponse {
        SkillResponse::ask(NO_MORE_FACTS, RESTART_OR_QUIT)
    }

    pub fn start_over(&self) -> SkillResponse {
        SkillResponse::ask(
            format!(
                "You'll now start a new {} game. Want to hear a new fact?",
                self.skill_name
            ),
            "Say yes to hear a new fact or no to stop the game.",
        )
    }

    pub fn help(&self) -> SkillResponse {
        SkillResponse::ask("I will tell you a fun fact about cats.", "Say yes to hear a fact.")
    }

    pub fn fallback(&self) -> SkillResponse {
        SkillResponse::ask(
            format!(
                "I cannot help you with that. I'm the {} and I will share cat facts with you. Want to hear a new fact?",
                self.skill_name
            ),
            "Say yes to start the game or no to quit.",
        )
    }

    /// Reply to "no".
    pub fn see_you_soon(&self) -> SkillResponse {
        SkillResponse::tell_and_end("See you soon!")
    }

    /// Reply to stop and cancel.
    pub fn thanks_for_playing(&self) -> SkillResponse {
        SkillResponse::tell_and_end(format!("Thank you for playing {}!", self.skill_name))
    }

    /// Reply when a request could not be handled.
    pub fn clarify(&self) -> SkillResponse {
        let prompt = "I don't understand that. Please say it again.";
        SkillResponse::ask(prompt, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speech() -> Speech {
        Speech::new("Cat Facts")
    }

    #[test]
    fn welcome_names_the_skill() {
        let response = speech().welcome();
        assert_eq!(
            response.speech.as_deref(),
            Some("Welcome to Cat Facts. Want to play?")
        );
        assert!(!response.should_end_session);
    }

    #[test]
    fn welcome_exhausted_offers_new_game() {
        let text = speech().welcome_exhausted().speech.unwrap();
        assert!(text.starts_with("Welcome to Cat Facts."));
        assert!(text.contains("no more cat facts"));
    }

    #[test]
    fn numbered_fact_includes_number_and_text() {
        let number = FactNumber::try_new(3).unwrap();
        let text = speech().numbered_fact(number, "Cats nap.").speech.unwrap();
        assert_eq!(
            text,
            "Here's cat fact number 3: Cats nap. Want to hear another fact?"
        );
    }

    #[test]
    fn out_of_range_explains_limits() {
        let response = speech().fact_number_out_of_range();
        assert_eq!(
            response.speech.as_deref(),
            Some("I only know ten facts. Try saying a number between 1 and 10 to get a fact.")
        );
        assert_eq!(
            response.reprompt.as_deref(),
            Some("Say a number between 1 and 10 to get a fact.")
        );
    }

    #[test]
    fn closing_messages_end_session() {
        assert!(speech().see_you_soon().should_end_session);
        let thanks = speech().thanks_for_playing();
        assert!(thanks.should_end_session);
        assert_eq!(thanks.speech.as_deref(), Some("Thank you for playing Cat Facts!"));
    }

    #[test]
    fn uses_configured_skill_name() {
        let custom = Speech::new("Kitty Trivia");
        assert!(custom.start_over().speech.unwrap().contains("Kitty Trivia"));
        assert!(custom.fallback().speech.unwrap().contains("Kitty Trivia"));
    }

    #[test]
    fn clarify_repeats_prompt() {
        let response = speech().clarify();
        assert_eq!(response.speech, response.reprompt);
        assert!(!response.should_end_session);
    }
}
