//! Contact form and mail-compose requests.
//!
//! The form never sends anything itself. A valid submission becomes a
//! `mailto:` URL which is handed to the desktop's mail client.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// An input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        })
    }
}

/// Reasons a submission is blocked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("enter an email address like name@example.com")]
    InvalidEmail,
}

impl ContactError {
    pub fn field(&self) -> Field {
        match self {
            ContactError::MissingField(field) => *field,
            ContactError::InvalidEmail => Field::Email,
        }
    }
}

/// Errors raised while handing a draft to the mail client.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to launch {program}")]
    Launch {
        program: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    Exited {
        program: &'static str,
        status: ExitStatus,
    },
}

/// What currently has keyboard focus in the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Message,
    Send,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Message,
            Focus::Message => Focus::Send,
            Focus::Send => Focus::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Name => Focus::Send,
            Focus::Email => Focus::Name,
            Focus::Message => Focus::Email,
            Focus::Send => Focus::Message,
        }
    }

    fn field(self) -> Option<Field> {
        match self {
            Focus::Name => Some(Field::Name),
            Focus::Email => Some(Field::Email),
            Focus::Message => Some(Field::Message),
            Focus::Send => None,
        }
    }
}

impl From<Field> for Focus {
    fn from(field: Field) -> Self {
        match field {
            Field::Name => Focus::Name,
            Field::Email => Focus::Email,
            Field::Message => Focus::Message,
        }
    }
}

/// A pre-filled message for the user's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// The draft as a `mailto:` URL.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body),
        )
    }
}

/// State of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: Focus,
    /// Why the last submission was blocked.
    pub error: Option<ContactError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> Option<&mut String> {
        match self.focus.field()? {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
        }
    }

    /// Type a character into the focused input.
    pub fn insert(&mut self, ch: char) {
        if let Some(value) = self.focused_mut() {
            value.push(ch);
        }
    }

    /// Delete the last character of the focused input.
    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_mut() {
            value.pop();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Check every input, first failing field first.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.value(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Build the mail draft, or block the submission and focus the
    /// offending input.
    pub fn submit(&mut self, recipient: &str) -> Result<MailDraft, ContactError> {
        if let Err(err) = self.validate() {
            self.focus = err.field().into();
            self.error = Some(err.clone());
            return Err(err);
        }
        self.error = None;

        let name = self.name.trim();
        Ok(MailDraft {
            recipient: recipient.to_string(),
            subject: format!("Portfolio message from {name}"),
            body: format!("{}\n\nReply to: {}", self.message, self.email.trim()),
        })
    }
}

/// The shape check an email input performs: `local@domain`, no whitespace,
/// non-empty domain labels.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').all(|label| !label.is_empty())
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, like
/// JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// The host's mail-composition facility.
pub trait MailComposer {
    fn compose(&mut self, url: &str) -> Result<(), ComposeError>;
}

/// Opens `mailto:` URLs with the platform's URL handler.
#[derive(Debug, Default)]
pub struct SystemMailComposer;

impl MailComposer for SystemMailComposer {
    fn compose(&mut self, url: &str) -> Result<(), ComposeError> {
        let (program, args): (&'static str, Vec<&str>) = if cfg!(target_os = "macos") {
            ("open", vec![url])
        } else if cfg!(windows) {
            ("rundll32", vec!["url.dll,FileProtocolHandler", url])
        } else {
            ("xdg-open", vec![url])
        };

        run_opener(program, &args)?;
        tracing::info!(program, "handed draft to mail client");
        Ok(())
    }
}

/// Run a URL opener to completion. Openers hand the URL to the desktop and
/// return straight away, so waiting also reaps the child.
fn run_opener(program: &'static str, args: &[&str]) -> Result<(), ComposeError> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| ComposeError::Launch { program, source })?;
    if !status.success() {
        return Err(ComposeError::Exited { program, status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there & welcome".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(encode_uri_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_uri_component("line\n\nnext"), "line%0A%0Anext");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component("@?=#/+"), "%40%3F%3D%23%2F%2B");
    }

    #[test]
    fn test_submit_builds_draft() {
        let mut form = filled();
        let draft = form.submit("me@example.com").unwrap();
        assert_eq!(draft.recipient, "me@example.com");
        assert!(draft.subject.contains("Ada Lovelace"));
        assert!(draft.body.contains("Hello there & welcome"));
        assert!(draft.body.contains("ada@example.com"));
        assert_eq!(draft.body, "Hello there & welcome\n\nReply to: ada@example.com");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_mailto_url() {
        let draft = filled().submit("me@example.com").unwrap();
        assert_eq!(
            draft.mailto_url(),
            "mailto:me@example.com?subject=Portfolio%20message%20from%20Ada%20Lovelace\
             &body=Hello%20there%20%26%20welcome%0A%0AReply%20to%3A%20ada%40example.com"
        );
    }

    #[test]
    fn test_missing_fields_block_submission() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.focus = Focus::Send;
            match field {
                Field::Name => form.name.clear(),
                Field::Email => form.email = "   ".to_string(),
                Field::Message => form.message.clear(),
            }
            assert_eq!(form.submit("me@example.com"), Err(ContactError::MissingField(field)));
            assert_eq!(form.focus, Focus::from(field));
            assert_eq!(form.error, Some(ContactError::MissingField(field)));
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("first.last@mail.example.com"));
        assert!(!looks_like_email("no-at-sign"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("a b@c"));
        assert!(!looks_like_email("a@b..c"));

        let mut form = filled();
        form.email = "not an email".to_string();
        assert_eq!(form.submit("me@example.com"), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_editing_follows_focus() {
        let mut form = ContactForm::new();
        form.insert('A');
        form.focus_next();
        form.insert('b');
        form.insert('c');
        form.backspace();
        form.focus_next();
        form.focus_next();
        // Send has no text
        form.insert('x');
        assert_eq!(form.name, "A");
        assert_eq!(form.email, "b");
        assert_eq!(form.message, "");
        assert_eq!(form.focus, Focus::Send);
        form.focus_previous();
        assert_eq!(form.focus, Focus::Message);
    }

    struct Recorder(Vec<String>);

    impl MailComposer for Recorder {
        fn compose(&mut self, url: &str) -> Result<(), ComposeError> {
            self.0.push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_only_valid_submissions_reach_composer() {
        let mut composer = Recorder(Vec::new());
        let mut form = filled();
        form.message.clear();
        if let Ok(draft) = form.submit("me@example.com") {
            composer.compose(&draft.mailto_url()).unwrap();
        }
        assert!(composer.0.is_empty());

        form.message = "hi".to_string();
        if let Ok(draft) = form.submit("me@example.com") {
            composer.compose(&draft.mailto_url()).unwrap();
        }
        assert_eq!(composer.0.len(), 1);
        assert!(composer.0[0].starts_with("mailto:me@example.com?subject="));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_opener_is_an_error() {
        let err = run_opener("sh", &["-c", "exit 3"]).unwrap_err();
        match err {
            ComposeError::Exited { program, status } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_opener() {
        assert!(run_opener("sh", &["-c", "exit 0"]).is_ok());
    }

    #[test]
    fn test_missing_opener_fails_to_launch() {
        let err = run_opener("folio-no-such-opener", &[]).unwrap_err();
        assert!(matches!(err, ComposeError::Launch { .. }));
    }
}
