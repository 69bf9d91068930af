mod cli;
mod contact;
mod content;
mod logging;
mod page;
mod ui;

use std::fs;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_background::{DotCanvas, DotSurface, FieldAnimator, FieldSettings, ParticleField};
use folio_config::Config;
use folio_core::{AnimationSpeed, ColorTheme, HostScheduler, Size, Wakeup};
use folio_typewriter::{Timing, Typewriter, TypewriterLoop};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    widgets::Paragraph,
};

use crate::cli::Cli;
use crate::contact::{ContactForm, Focus, MailComposer, SystemMailComposer};
use crate::content::SectionId;
use crate::page::{Page, Viewport};

/// How long a status message stays on the help line.
const STATUS_MS: u64 = 3000;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let log_guard = logging::init(&config.log_level);
    if let Some(guard) = &log_guard {
        tracing::info!(path = %guard.path().display(), "logging to file");
    }

    if let Some(path) = &cli.export {
        let year = Local::now().year();
        let text = page::export_text(cli.width, &config.typewriter.phrases, year);
        fs::write(path, text)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), width = cli.width, "exported portfolio");
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(config, &cli).run(terminal);
    ratatui::restore();
    result
}

/// A message shown on the help line until `until_ms`.
#[derive(Debug)]
struct Status {
    text: String,
    is_error: bool,
    until_ms: u64,
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Current accent colour.
    color_theme: ColorTheme,
    /// Current particle speed.
    animation_speed: AnimationSpeed,
    /// Frame and timer callbacks for the animated components.
    host: HostScheduler,
    /// Origin of the host timeline.
    started: Instant,
    surface: DotSurface,
    /// Fixed particle seed from the command line or config.
    seed: Option<u64>,
    particles_enabled: bool,
    particles: Option<FieldAnimator<DotCanvas>>,
    caption: Option<TypewriterLoop<String>>,
    /// Laid-out sections, rebuilt when the width or theme changes.
    page: Option<Page>,
    viewport: Viewport,
    /// Rows available to the page body in the last frame.
    body_height: usize,
    form: Option<ContactForm>,
    composer: Box<dyn MailComposer>,
    status: Option<Status>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, cli: &Cli) -> Self {
        let capable = !matches!(std::env::var("TERM").as_deref(), Ok("dumb"));
        Self {
            running: false,
            color_theme: config.color_theme,
            animation_speed: config.animation_speed,
            host: HostScheduler::new(config.frame_interval()),
            started: Instant::now(),
            surface: DotSurface::new(capable, config.particles.background),
            seed: cli.seed.or(config.particles.seed),
            particles_enabled: config.particles.enabled && !cli.no_particles,
            particles: None,
            caption: None,
            page: None,
            viewport: Viewport::default(),
            body_height: 0,
            form: None,
            composer: Box::new(SystemMailComposer),
            status: None,
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        if self.particles_enabled {
            self.mount_particles();
        }
        self.mount_caption();

        let result = self.event_loop(&mut terminal);
        self.unmount_particles();
        if let Some(mut caption) = self.caption.take() {
            caption.stop(&mut self.host);
        }
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            self.dispatch_wakeups();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn dispatch_wakeups(&mut self) {
        self.dispatch_at(self.elapsed_ms());
    }

    /// Advance the host timeline to `now` and hand due callbacks to their
    /// owners.
    fn dispatch_at(&mut self, now: u64) {
        for wakeup in self.host.advance_to(now) {
            match wakeup {
                Wakeup::Frame(request) => {
                    if let Some(particles) = self.particles.as_mut() {
                        particles.on_frame(request, &mut self.host);
                    }
                }
                Wakeup::Timer(id) => {
                    if let Some(caption) = self.caption.as_mut() {
                        caption.on_timer(id, &mut self.host);
                    }
                }
            }
        }

        if self.status.as_ref().is_some_and(|s| s.until_ms <= now) {
            self.status = None;
        }
    }

    /// Generate a particle field and start animating it.
    fn mount_particles(&mut self) {
        let cfg = &self.config.particles;
        let settings = FieldSettings {
            count: cfg.count,
            palette: cfg.palette.clone(),
            opacity: cfg.opacity,
            max_speed: cfg.max_speed,
            min_radius: cfg.min_radius,
            radius_spread: cfg.radius_spread,
        };
        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, count = settings.count, "generating particle field");

        let mut field = ParticleField::seeded(&settings, seed);
        field.set_speed(self.animation_speed);
        match FieldAnimator::start(&mut self.surface, field, &mut self.host) {
            Ok(animator) => self.particles = Some(animator),
            Err(err) => {
                tracing::warn!(%err, "particle background disabled");
                self.set_status("Particles unavailable in this terminal", true);
            }
        }
    }

    fn unmount_particles(&mut self) {
        if let Some(mut particles) = self.particles.take() {
            particles.stop(&mut self.host);
        }
    }

    /// Start the hero caption cycling through the configured phrases.
    fn mount_caption(&mut self) {
        let cfg = &self.config.typewriter;
        match Typewriter::new(cfg.phrases.iter().cloned()) {
            Ok(machine) => {
                let timing = Timing {
                    typing: cfg.typing_delay(),
                    erasing: cfg.erasing_delay(),
                };
                let mut caption = TypewriterLoop::new(machine, timing, String::new());
                caption.start(&mut self.host);
                self.caption = Some(caption);
            }
            Err(err) => tracing::warn!(%err, "hero caption disabled"),
        }
    }

    fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(Status {
            text: text.into(),
            is_error,
            until_ms: self.elapsed_ms() + STATUS_MS,
        });
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let accent = self.color_theme.color();

        let [hero_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(ui::hero_height(area.height)),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        // Hero: particles first, text on top
        if let Some(particles) = self.particles.as_mut() {
            particles
                .canvas_mut()
                .set_client_size(Size::new(hero_area.width.into(), hero_area.height.into()));
            frame.render_widget(particles.canvas(), hero_area);
        }
        let view = ui::HeroView {
            caption: self.caption.as_ref().map(|c| c.output().as_str()),
            accent,
            elapsed_ms: self.elapsed_ms(),
        };
        ui::render_hero(frame, hero_area, &view);

        // Body
        if self
            .page
            .as_ref()
            .is_none_or(|page| page.width() != body_area.width)
        {
            self.page = Some(Page::build(body_area.width, accent, Local::now().year()));
        }
        self.body_height = body_area.height.into();
        let mut section = String::new();
        if let Some(page) = &self.page {
            self.viewport
                .scroll_to(self.viewport.offset, page.len(), self.body_height);
            let start = self.viewport.offset;
            let end = (start + self.body_height).min(page.len());
            frame.render_widget(Paragraph::new(page.lines()[start..end].to_vec()), body_area);

            let current = page.section_at(start);
            let idx = SectionId::ALL.iter().position(|&s| s == current).unwrap_or(0);
            section = format!("{} {}/{}", current.title(), idx + 1, SectionId::ALL.len());
        }

        let status = self.status.as_ref().map(|s| (s.text.as_str(), s.is_error));
        ui::render_help(frame, help_area, accent, &section, status);

        if let Some(form) = &self.form {
            ui::render_form(frame, area, form, accent);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next scheduled callback or repaint.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let now = self.elapsed_ms();
        let frame = self.host.frame_interval();
        let timeout = self
            .host
            .next_deadline()
            .map_or(frame, |deadline| {
                Duration::from_millis(deadline.saturating_sub(now))
            })
            .min(frame);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) =
            (key.modifiers, key.code)
        {
            self.quit();
            return;
        }
        if self.form.is_some() {
            self.on_form_key(key);
            return;
        }

        let page_rows = self.body_height.max(1) as isize;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.scroll_by(1),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.scroll_by(-1),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroll_by(page_rows),
            (_, KeyCode::PageUp) => self.scroll_by(-page_rows),
            (_, KeyCode::Char('g') | KeyCode::Home) => self.viewport.offset = 0,
            (_, KeyCode::Char('G') | KeyCode::End) => self.scroll_by(isize::MAX),
            (_, KeyCode::Tab) => {
                if let Some(page) = &self.page {
                    self.viewport.next_section(page, self.body_height);
                }
            }
            (_, KeyCode::BackTab) => {
                if let Some(page) = &self.page {
                    self.viewport.previous_section(page, self.body_height);
                }
            }
            (_, KeyCode::Char(d @ '1'..='9')) => {
                let idx = d as usize - '1' as usize;
                if let Some(&id) = SectionId::ALL.get(idx) {
                    self.jump_to(id);
                }
            }
            (_, KeyCode::Char('w')) => self.jump_to(SectionId::Projects),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('s')) => self.cycle_animation_speed(),
            (_, KeyCode::Char('p')) => self.toggle_particles(),
            (_, KeyCode::Char('m')) => self.open_form(),
            _ => {}
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => self.form = None,
            (_, KeyCode::Tab) => form.focus_next(),
            (_, KeyCode::BackTab) => form.focus_previous(),
            (_, KeyCode::Enter) => match form.focus {
                Focus::Send => self.submit_form(),
                Focus::Message => form.insert('\n'),
                Focus::Name | Focus::Email => form.focus_next(),
            },
            (_, KeyCode::Backspace) => form.backspace(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(ch)) => form.insert(ch),
            _ => {}
        }
    }

    /// Validate the form and hand a valid draft to the mail client.
    fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let draft = match form.submit(&self.config.contact.recipient) {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(%err, "contact form submission blocked");
                return;
            }
        };

        match self.composer.compose(&draft.mailto_url()) {
            Ok(()) => {
                self.form = None;
                self.set_status("Opening your mail client…", false);
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to open mail client");
                self.set_status(format!("Could not open mail client: {err}"), true);
            }
        }
    }

    fn open_form(&mut self) {
        self.form.get_or_insert_with(ContactForm::new);
        self.jump_to(SectionId::Contact);
    }

    fn scroll_by(&mut self, delta: isize) {
        let len = self.page.as_ref().map_or(0, Page::len);
        self.viewport.scroll_by(delta, len, self.body_height);
    }

    fn jump_to(&mut self, id: SectionId) {
        if let Some(page) = &self.page {
            self.viewport
                .scroll_to(page.anchor(id), page.len(), self.body_height);
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
        self.page = None;
        self.set_status(format!("Theme: {}", self.color_theme.display_name()), false);
    }

    /// Cycle the particle speed.
    fn cycle_animation_speed(&mut self) {
        self.animation_speed = self.animation_speed.next();
        if let Some(particles) = self.particles.as_mut() {
            particles.field_mut().set_speed(self.animation_speed);
        }
        self.set_status(
            format!("Speed: {}", self.animation_speed.display_name()),
            false,
        );
    }

    /// Stop the particle background, or start a fresh field.
    fn toggle_particles(&mut self) {
        if self.particles.is_some() {
            self.unmount_particles();
            self.particles_enabled = false;
            self.set_status("Particles off", false);
        } else {
            self.particles_enabled = true;
            self.mount_particles();
            if self.particles.is_some() {
                self.set_status("Particles on", false);
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use folio_core::Rgb;

    use crate::contact::{ComposeError, ContactError, Field};

    /// Composer that records every URL, failing when told to.
    #[derive(Clone, Default)]
    struct Recorder {
        urls: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl MailComposer for Recorder {
        fn compose(&mut self, url: &str) -> Result<(), ComposeError> {
            self.urls.borrow_mut().push(url.to_string());
            if self.fail {
                return Err(ComposeError::Launch {
                    program: "xdg-open",
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            Ok(())
        }
    }

    fn app(composer: Recorder) -> App {
        let mut app = App::new(Config::default(), &Cli::parse_from(["folio"]));
        app.surface = DotSurface::new(true, Rgb::BLACK);
        app.composer = Box::new(composer);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_contact_form_submits_draft() {
        let recorder = Recorder::default();
        let mut app = app(recorder.clone());

        press(&mut app, KeyCode::Char('m'));
        assert!(app.form.is_some());
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Hi");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            *recorder.urls.borrow(),
            vec![
                "mailto:swarajwaykar8@gmail.com?subject=Portfolio%20message%20from%20Ada\
                 &body=Hi%0A%0AReply%20to%3A%20ada%40example.com"
                    .to_string()
            ]
        );
        assert!(app.form.is_none());
        assert!(app.status.as_ref().is_some_and(|s| !s.is_error));
    }

    #[test]
    fn test_incomplete_form_is_blocked() {
        let recorder = Recorder::default();
        let mut app = app(recorder.clone());

        press(&mut app, KeyCode::Char('m'));
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);

        assert!(recorder.urls.borrow().is_empty());
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.error, Some(ContactError::MissingField(Field::Email)));
        assert_eq!(form.focus, Focus::Email);
    }

    #[test]
    fn test_composer_failure_keeps_form_open() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut app = app(recorder.clone());

        press(&mut app, KeyCode::Char('m'));
        app.form = Some(ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
            focus: Focus::Send,
            error: None,
        });
        press(&mut app, KeyCode::Enter);

        assert_eq!(recorder.urls.borrow().len(), 1);
        assert!(app.form.is_some());
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_escape_closes_form_before_quitting() {
        let mut app = app(Recorder::default());
        app.running = true;

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.form.as_ref().map(|f| f.name.as_str()), Some("q"));
        press(&mut app, KeyCode::Esc);
        assert!(app.form.is_none());
        assert!(app.running);
        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn test_toggle_particles_cancels_frame() {
        let mut app = app(Recorder::default());
        app.mount_particles();
        assert!(app.particles.is_some());
        assert_eq!(app.host.pending_frames(), 1);

        press(&mut app, KeyCode::Char('p'));
        assert!(app.particles.is_none());
        assert_eq!(app.host.pending_frames(), 0);

        press(&mut app, KeyCode::Char('p'));
        assert!(app.particles.is_some());
        assert_eq!(app.host.pending_frames(), 1);
    }

    #[test]
    fn test_particles_unavailable_without_capable_terminal() {
        let mut app = app(Recorder::default());
        app.surface = DotSurface::new(false, Rgb::BLACK);
        app.mount_particles();
        assert!(app.particles.is_none());
        assert_eq!(app.host.pending_frames(), 0);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_dispatch_advances_caption_and_particles() {
        let mut app = app(Recorder::default());
        app.mount_particles();
        app.mount_caption();
        let caption = |app: &App| app.caption.as_ref().unwrap().output().clone();
        assert_eq!(caption(&app), "");

        let particles = app.particles.as_mut().unwrap();
        particles.canvas_mut().set_client_size(Size::new(20, 5));
        app.dispatch_at(0);
        assert_eq!(app.particles.as_ref().unwrap().frames_drawn(), 1);
        assert_eq!(caption(&app), "");

        app.dispatch_at(65);
        assert_eq!(caption(&app), "F");
        assert_eq!(app.particles.as_ref().unwrap().frames_drawn(), 2);
        assert_eq!(app.host.pending_frames(), 1);
        assert_eq!(app.host.pending_timers(), 1);
    }
}
