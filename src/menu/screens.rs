//! Interactive menu screens
//!
//! Main menu → cipher family → cipher session. Every cipher visit starts a
//! new [`CipherSession`], so its history begins empty.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::prompt::Prompter;
use crate::ciphers::{Cipher, CipherFamily, CipherKind, Direction};
use crate::display::{format_generated_alphabet, format_history, format_result};
use crate::error::{CipherError, CipherResult};
use crate::models::{CipherAlphabet, RailLevels, ShiftKey};
use crate::services::CipherSession;

const BANNER: &str = "Inspired by the work of Simon Singh in his book \"The Code Book: The Science of Secrecy From Ancient Egypt to Quantum Cryptography\".

* Coded by Jonathan Ferreira.
* Ciphers developed by a ton of ancient and modern peoples.
";

const CLASSIC_PAIRING_NOTE: &str =
    "The classic alphabet pairs letters off, so encrypting twice gives back the message.";

/// What the user can do inside a cipher session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAction {
    Encrypt,
    Decrypt,
    EncryptClassic,
    DecryptClassic,
    ShowHistory,
    Quit,
}

impl CipherAction {
    /// Actions offered for a cipher, in menu order
    pub fn for_kind(kind: CipherKind) -> &'static [CipherAction] {
        match kind {
            CipherKind::MlecchitaVikaalpa => &[
                CipherAction::Encrypt,
                CipherAction::Decrypt,
                CipherAction::EncryptClassic,
                CipherAction::DecryptClassic,
                CipherAction::ShowHistory,
                CipherAction::Quit,
            ],
            CipherKind::CaesarShift
            | CipherKind::KeyedCaesar
            | CipherKind::Vigenere
            | CipherKind::RailFence => &[
                CipherAction::Encrypt,
                CipherAction::Decrypt,
                CipherAction::ShowHistory,
                CipherAction::Quit,
            ],
        }
    }

    pub fn label(self, kind: CipherKind) -> String {
        match self {
            CipherAction::Encrypt if kind == CipherKind::MlecchitaVikaalpa => {
                format!("Encrypt {} with a random alphabet", kind)
            }
            CipherAction::Encrypt => format!("Encrypt {}", kind),
            CipherAction::Decrypt => format!("Decrypt {}", kind),
            CipherAction::EncryptClassic => format!("Encrypt {} with the classic alphabet", kind),
            CipherAction::DecryptClassic => format!("Decrypt {} with the classic alphabet", kind),
            CipherAction::ShowHistory => "Display last fifteen results".to_string(),
            CipherAction::Quit => "Quit".to_string(),
        }
    }
}

fn heading(title: &str) -> String {
    let rule = "=".repeat(title.chars().count());
    format!("{}\n{}\n{}\n", rule, title, rule)
}

fn description(kind: CipherKind) -> &'static str {
    match kind {
        CipherKind::CaesarShift => {
            "Every letter moves the same number of places along the alphabet."
        }
        CipherKind::KeyedCaesar => {
            "A keyword is written at the front of the alphabet and the rest follows on from it."
        }
        CipherKind::MlecchitaVikaalpa => {
            "Letters are paired off at random and each is replaced by its partner."
        }
        CipherKind::Vigenere => "Each letter of a repeating key picks a different Caesar shift.",
        CipherKind::RailFence => {
            "Letters are dealt across several rails and each rail is read off in turn."
        }
    }
}

/// The interactive menu state machine
pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
    show_banner: bool,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(prompter: Prompter<R, W>, show_banner: bool) -> Self {
        Self {
            prompter,
            show_banner,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed for generated alphabets
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Run until the user quits or the input closes
    pub fn run(&mut self) -> CipherResult<()> {
        match self.main_screen() {
            Err(CipherError::InputClosed) => {
                tracing::debug!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn main_screen(&mut self) -> CipherResult<()> {
        let options: Vec<&str> = CipherFamily::ALL
            .iter()
            .map(|family| family.name())
            .chain(["Quit"])
            .collect();

        loop {
            self.prompter.clear_screen()?;
            self.prompter.say(&heading("jciphers"))?;
            if self.show_banner {
                self.prompter.say(BANNER)?;
            }

            let choice = self.prompter.option_selection("\nChoose a cipher type.", &options)?;
            match CipherFamily::ALL.get(choice) {
                Some(&family) => self.family_screen(family)?,
                None => return Ok(()),
            }
        }
    }

    fn family_screen(&mut self, family: CipherFamily) -> CipherResult<()> {
        let kinds = family.ciphers();
        let options: Vec<&str> = kinds
            .iter()
            .map(|kind| kind.name())
            .chain(["Quit"])
            .collect();
        let prompt = format!("Choose a {} cipher:", family.name().to_lowercase());
        let continue_prompt = format!("\nContinue using {} ciphers?", family.name().to_lowercase());

        loop {
            self.prompter.clear_screen()?;
            self.prompter.say(&heading(&format!("{} Ciphers", family.name())))?;

            let choice = self.prompter.option_selection(&prompt, &options)?;
            let Some(&kind) = kinds.get(choice) else {
                return Ok(());
            };

            self.cipher_screen(kind)?;

            if self.prompter.option_selection(&continue_prompt, &["Yes", "No"])? == 1 {
                return Ok(());
            }
        }
    }

    fn intro(&mut self, kind: CipherKind) -> CipherResult<()> {
        self.prompter.clear_screen()?;
        self.prompter.say(&heading(&format!("{} Cipher", kind.name())))?;
        self.prompter.say(description(kind))?;
        if kind == CipherKind::MlecchitaVikaalpa
            && CipherAlphabet::mlecchita_classic().is_self_inverse()
        {
            self.prompter.say(CLASSIC_PAIRING_NOTE)?;
        }
        self.prompter.say("")
    }

    fn cipher_screen(&mut self, kind: CipherKind) -> CipherResult<()> {
        let mut session = CipherSession::new(kind);
        let actions = CipherAction::for_kind(kind);
        let labels: Vec<String> = actions.iter().map(|action| action.label(kind)).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        let continue_prompt = format!("\nContinue using {} ciphers?", kind.name());

        self.intro(kind)?;
        loop {
            let choice = self.prompter.option_selection("Choose a function:", &labels)?;

            let outcome = match actions[choice] {
                CipherAction::Quit => return Ok(()),
                CipherAction::ShowHistory => {
                    let table = format_history(kind, session.history());
                    self.prompter.say(&table)
                }
                CipherAction::Encrypt => self.run_action(&mut session, Direction::Encrypt, false),
                CipherAction::Decrypt => self.run_action(&mut session, Direction::Decrypt, false),
                CipherAction::EncryptClassic => {
                    self.run_action(&mut session, Direction::Encrypt, true)
                }
                CipherAction::DecryptClassic => {
                    self.run_action(&mut session, Direction::Decrypt, true)
                }
            };

            match outcome {
                Ok(()) => {}
                Err(e) if e.is_unsupported_character() || e.is_invalid_parameter() => {
                    self.prompter.say(&e.to_string())?;
                    continue;
                }
                Err(e) => return Err(e),
            }

            if self.prompter.option_selection(&continue_prompt, &["Yes", "No"])? == 1 {
                return Ok(());
            }
            self.intro(kind)?;
        }
    }

    fn run_action(
        &mut self,
        session: &mut CipherSession,
        direction: Direction,
        classic: bool,
    ) -> CipherResult<()> {
        let raw_message = self
            .prompter
            .prompt_string(&format!("\nEnter a message to {}: ", direction))?;
        session.prepare_message(&raw_message)?;

        let cipher = match session.kind() {
            CipherKind::CaesarShift => Cipher::Caesar(self.prompter.prompt_parsed::<ShiftKey>(
                "\nEnter number of cipher shifts (min: 1, max: 25): ",
            )?),
            CipherKind::KeyedCaesar => {
                let key = self.prompter.prompt_string("\nEnter a cipher key: ")?;
                Cipher::keyword(&key)?
            }
            CipherKind::Vigenere => {
                let key = self.prompter.prompt_string("\nEnter a cipher key: ")?;
                Cipher::vigenere(&key)?
            }
            CipherKind::RailFence => {
                Cipher::RailFence(self.prompter.prompt_parsed::<RailLevels>(
                    "\nEnter number of transposition levels (min: 2, max: 99): ",
                )?)
            }
            CipherKind::MlecchitaVikaalpa if classic => Cipher::MlecchitaClassic,
            CipherKind::MlecchitaVikaalpa => match direction {
                Direction::Encrypt => {
                    let (entry, alphabet) =
                        session.encrypt_random_mlecchita(&raw_message, &mut self.rng)?;
                    self.prompter.say(&format_generated_alphabet(&alphabet))?;
                    return self.prompter.say(&format_result(direction, &entry));
                }
                Direction::Decrypt => {
                    let alphabet = self.prompter.prompt_string("\nEnter the cipher alphabet: ")?;
                    Cipher::mlecchita(&alphabet)?
                }
            },
        };

        let entry = session.process(direction, &raw_message, &cipher)?;
        self.prompter.say(&format_result(direction, &entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), false);
        let mut menu = Menu::new(prompter, true).with_seed(5);
        menu.run().unwrap();
        String::from_utf8(menu.into_prompter().into_output()).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let out = run_script("3\n");
        assert!(out.contains("Choose a cipher type."));
        assert!(out.contains("(1) Transposition\n(2) Substitution\n(3) Quit"));
        assert!(out.contains("Simon Singh"));
    }

    #[test]
    fn test_eof_leaves_cleanly() {
        let out = run_script("");
        assert!(out.contains("Choose a cipher type."));
    }

    #[test]
    fn test_caesar_encrypt_flow() {
        // Substitution → Caesar → Encrypt → "hello", 3 → No → No → Quit
        let out = run_script("2\n1\n1\nhello\n3\n2\n2\n3\n");
        assert!(out.contains("Caesar Shift Cipher"));
        assert!(out.contains("Your encrypted message is: KHOOR"));
        assert!(out.contains("Continue using Caesar Shift ciphers?"));
        assert!(out.contains("Continue using substitution ciphers?"));
    }

    #[test]
    fn test_rail_fence_decrypt_flow() {
        let out = run_script("1\n1\n2\nWRIORFEOEEESVELANADCEDETC\n3\n2\n2\n3\n");
        assert!(out.contains("Your decrypted message is: WEAREDISCOVEREDFLEEATONCE"));
    }

    #[test]
    fn test_rejected_message_returns_to_function_menu() {
        // Vigenère → Encrypt "HELLO123" fails → Quit
        let out = run_script("2\n4\n1\nHELLO123\n4\n2\n3\n");
        assert!(out.contains("Numbers are not supported in your message."));
        assert!(!out.contains("Your encrypted message is"));
        assert!(!out.contains("Continue using Vigenère ciphers?"));
    }

    #[test]
    fn test_empty_vigenere_key_is_reported() {
        let out = run_script("2\n4\n1\nhello\n!!\n4\n2\n3\n");
        assert!(out.contains("Invalid parameter: A Vigenère key needs at least one letter"));
    }

    #[test]
    fn test_history_is_shown_newest_first() {
        // Caesar: encrypt "abc"/1, yes, encrypt "xyz"/2, yes, show history, no
        let out = run_script("2\n1\n1\nabc\n1\n1\n1\nxyz\n2\n1\n3\n2\n2\n3\n");
        let zab = out.rfind("ZAB").unwrap();
        let bcd = out.rfind("BCD").unwrap();
        assert!(zab < bcd);
        assert!(out.contains("SHIFTS"));
    }

    #[test]
    fn test_history_empty_message() {
        let out = run_script("1\n1\n3\n2\n2\n3\n");
        assert!(out.contains("No entries."));
    }

    #[test]
    fn test_shift_is_reprompted() {
        let out = run_script("2\n1\n1\nhello\n0\n3\n2\n2\n3\n");
        assert!(out.contains("at most 25 places"));
        assert!(out.contains("Your encrypted message is: KHOOR"));
    }

    #[test]
    fn test_mlecchita_classic_flow() {
        let out = run_script("2\n3\n3\nhello\n2\n2\n3\n");
        assert!(out.contains("Your encrypted message is: BURRQ"));
        assert!(out.contains(CLASSIC_PAIRING_NOTE));
    }

    #[test]
    fn test_pairing_note_only_for_mlecchita() {
        let out = run_script("2
1
4
2
3
");
        assert!(out.contains("Caesar Shift Cipher"));
        assert!(!out.contains(CLASSIC_PAIRING_NOTE));
    }

    #[test]
    fn test_mlecchita_random_shows_alphabet() {
        let out = run_script("2\n3\n1\nhello\n2\n2\n3\n");
        assert!(out.contains("Generated cipher alphabet: "));
        assert!(out.contains("Your encrypted message is: "));
    }

    #[test]
    fn test_mlecchita_decrypt_with_alphabet() {
        let out = run_script("2\n3\n2\nBURRQ\nVHMXUWIBGKJRCSQYOLNZEAFDPT\n2\n2\n3\n");
        assert!(out.contains("Your decrypted message is: HELLO"));
    }

    #[test]
    fn test_keyword_caesar_flow() {
        let out = run_script("2\n2\n1\nflee at once\nzebra\n2\n2\n3\n");
        assert!(out.contains("Your encrypted message is: CJAAZSMLBA"));
    }

    #[test]
    fn test_action_labels() {
        let kind = CipherKind::CaesarShift;
        let labels: Vec<String> = CipherAction::for_kind(kind)
            .iter()
            .map(|a| a.label(kind))
            .collect();
        assert_eq!(
            labels,
            vec![
                "Encrypt Caesar Shift",
                "Decrypt Caesar Shift",
                "Display last fifteen results",
                "Quit"
            ]
        );
    }
}
