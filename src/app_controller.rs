use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::demo_data::DEMO_LIVE_URL;
use crate::explanation::ExplanationRecord;
use crate::file_utils::FileManager;
use crate::insight;
use crate::language_utils::{InterfaceLanguage, ui_text};
use crate::lexicon::Lexicon;
use crate::playback::{PlaybackDriver, PlaybackOutcome, PlaybackReport, TickControl};
use crate::quiz::{self, QuizResult};
use crate::session::StudySession;
use crate::subtitle_processor::{SubtitleEntry, format_short};
use crate::timeline::TimelineEngine;
use crate::tokenizer::{highlight, lexicon_words};

// @module: Application controller, the terminal UI layer over a study session

const HIGHLIGHT_ON: &str = "\x1B[1;35m";
const HIGHLIGHT_OFF: &str = "\x1B[0m";

/// Which export formats to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    TimedCaptions,
    PlainText,
    All,
}

/// Options for a simulated playback run
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Position to start from, in milliseconds
    pub from_ms: u64,
    /// Upper bound on the number of ticks
    pub max_ticks: Option<u64>,
    /// Keep the engine playing at the end of the timeline instead of stopping
    pub keep_playing: bool,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: The single session this controller drives
    session: StudySession,
    // @field: Emit ANSI colour for highlighted words
    use_color: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let session = StudySession::new(&config);
        Ok(Self {
            config,
            session,
            use_color: true,
        })
    }

    /// Disable or enable ANSI colour in rendered subtitles
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut StudySession {
        &mut self.session
    }

    /// Load subtitles from a JSON file, or the demo stream when no file is given
    pub fn load(&mut self, subtitles: Option<&Path>, url: Option<&str>) -> Result<()> {
        match subtitles {
            Some(path) => {
                let entries = crate::subtitle_processor::load_entries_from_json(path)?;
                self.session.load_entries(entries)?;
                info!("Loaded subtitles from {}", path.display());
            }
            None => {
                self.session.load_demo(url);
                info!("{}", self.session.t("loaded_demo"));
            }
        }
        Ok(())
    }

    fn ensure_loaded(&mut self) {
        if !self.session.is_loaded() {
            self.session.load_demo(None);
        }
    }

    /// Render the subtitle area for the current position
    pub fn render_current(&self) -> String {
        render_subtitle_area(
            self.session.timeline(),
            self.session.lexicon(),
            self.session.language(),
            self.use_color,
        )
    }

    /// Seek and render the subtitle area at a position
    pub fn show_at(&mut self, position_ms: u64) -> String {
        self.ensure_loaded();
        self.session.timeline_mut().seek(position_ms);
        self.render_current()
    }

    /// Simulate live playback, handing each changed frame to `on_frame`
    pub async fn play<F>(&mut self, options: PlayOptions, mut on_frame: F) -> Result<PlaybackReport>
    where
        F: FnMut(&str),
    {
        self.ensure_loaded();
        self.session.timeline_mut().seek(options.from_ms);

        let stop_at_end = self.config.playback.stop_at_end && !options.keep_playing;
        let mut driver = PlaybackDriver::new(self.config.playback.tick_interval());
        if let Some(max_ticks) = options.max_ticks {
            driver = driver.with_max_ticks(max_ticks);
        }

        // Ctrl-C stops the run before the next tick
        let handle = driver.handle();
        let ctrl_c = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                handle.stop();
            }
        });

        let lexicon = self.session.lexicon().clone();
        let language = self.session.language();
        let use_color = self.use_color;

        let progress = if options.show_progress {
            let bar = ProgressBar::new(self.session.timeline().max_position());
            let style = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.magenta/blue}] {pos}/{len} ms {msg}")
                .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{bar:40}] {pos}/{len} ms"))
                .map_err(|e| anyhow!("Invalid progress template: {}", e))?;
            bar.set_style(style.progress_chars("#>-"));
            bar.set_position(self.session.timeline().position());
            Some(bar)
        } else {
            None
        };

        let mut emit = |frame: &str| match &progress {
            Some(bar) => bar.println(frame),
            None => on_frame(frame),
        };

        let mut last_shown = shown_entries(self.session.timeline());
        emit(&render_subtitle_area(self.session.timeline(), &lexicon, language, use_color));

        let report = driver
            .run(self.session.timeline_mut(), |engine| {
                if let Some(bar) = &progress {
                    bar.set_position(engine.position());
                }

                let shown = shown_entries(engine);
                if shown != last_shown {
                    emit(&render_subtitle_area(engine, &lexicon, language, use_color));
                    last_shown = shown;
                }

                if stop_at_end && engine.at_end() {
                    TickControl::Stop
                } else {
                    TickControl::Continue
                }
            })
            .await;

        ctrl_c.abort();
        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        match report.outcome {
            PlaybackOutcome::NotStarted => warn!("Nothing to play: the subtitle buffer is empty"),
            PlaybackOutcome::StopRequested => info!("{}", ui_text(language, "stop_sim")),
            _ => debug!("Playback finished: {:?}", report.outcome),
        }

        Ok(report)
    }

    /// Explain a word and render the explanation
    pub fn explain(&mut self, word: &str) -> String {
        let language = self.session.language();
        let record = self.session.explain(word);
        render_explanation(record, language)
    }

    /// Render the vocabulary book
    pub fn render_vocabulary(&self) -> String {
        let vocabulary = self.session.vocabulary();
        let mut out = format!("## {}\n", self.session.t("vocab_book"));
        if vocabulary.is_empty() {
            let _ = writeln!(out, "{}", self.session.t("no_vocab"));
            return out;
        }
        for (word, record) in vocabulary.list() {
            let _ = writeln!(out, "{}  —  {}", word, record.level);
            let _ = writeln!(out, "    {}", record.explanation_for(self.session.language()));
            let _ = writeln!(out, "    Lemma: {}", record.lemma);
        }
        out
    }

    /// Score the quiz and render the result
    pub fn quiz<S: AsRef<str>>(&mut self, answers: &[S]) -> String {
        let result = self.session.submit_quiz(answers);
        render_quiz_result(&result, self.session.language())
    }

    /// Ask every quiz question on `output` and read the answers from `input`
    pub fn run_quiz_interactive<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<QuizResult> {
        let questions = quiz::question_bank();
        writeln!(output, "## {} ({})", self.session.t("test"), questions.len())?;

        let mut answers = Vec::with_capacity(questions.len());
        for (i, question) in questions.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, question.prompt)?;
            for option in &question.options {
                writeln!(output, "   {}", option.display())?;
            }
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            input.read_line(&mut line)?;
            answers.push(line.trim().to_string());
        }

        let result = self.session.submit_quiz(&answers);
        write!(output, "{}", render_quiz_result(&result, self.session.language()))?;
        Ok(result)
    }

    /// Render the idol insight page
    pub fn render_insight(&self) -> String {
        let width = self.config.insight.chart_width;
        let mut out = format!("## {}\n\n", self.session.t("insight"));

        let _ = writeln!(out, "### {}", self.session.t("top_words"));
        out.push_str(&insight::render_bars(&insight::top_corpus_words(self.config.insight.top_words), width));

        for (title, rows) in [("adverbs", insight::adverb_usage()), ("registers", insight::register_usage())] {
            let _ = writeln!(out, "\n### {}", self.session.t(title));
            let bars: Vec<(String, u32)> = rows.iter().map(|r| (r.label.clone(), r.count)).collect();
            out.push_str(&insight::render_bars(&bars, width));
            for row in &rows {
                let _ = writeln!(out, "  {}: {:.1}%", row.label, row.percent);
            }
        }

        out
    }

    /// Write the requested exports into `output_dir`
    pub fn export(&mut self, format: ExportFormat, output_dir: &Path, force_overwrite: bool) -> Result<Vec<PathBuf>> {
        self.ensure_loaded();

        let mut artifacts = Vec::new();
        if matches!(format, ExportFormat::TimedCaptions | ExportFormat::All) {
            artifacts.push(self.session.export_timed_captions());
        }
        if matches!(format, ExportFormat::PlainText | ExportFormat::All) {
            artifacts.push(self.session.export_plain_text());
        }

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            let path = FileManager::write_artifact(artifact, output_dir, force_overwrite)?;
            info!("Success: {:?}", path);
            written.push(path);
        }
        Ok(written)
    }

    /// Line-oriented interactive session
    pub async fn run_study<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "# {}", self.session.t("title"))?;
        writeln!(output, "{}", STUDY_HELP)?;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let mut parts = line.split_whitespace();
            let Some(command) = parts.next() else {
                continue;
            };
            let args: Vec<&str> = parts.collect();

            match command {
                "quit" | "exit" => break,
                "help" => writeln!(output, "{}\n  e.g. load {}", STUDY_HELP, DEMO_LIVE_URL)?,
                "load" => {
                    self.load(None, args.first().copied())?;
                    writeln!(output, "{}", self.session.t("loaded_demo"))?;
                }
                "show" => {
                    let position = self.session.timeline().position();
                    write!(output, "{}", self.show_at(position))?;
                }
                "seek" => match args.first().and_then(|a| a.parse::<u64>().ok()) {
                    Some(position) => write!(output, "{}", self.show_at(position))?,
                    None => writeln!(output, "usage: seek <ms>")?,
                },
                "play" => {
                    let options = PlayOptions {
                        from_ms: self.session.timeline().position(),
                        max_ticks: args.first().and_then(|a| a.parse().ok()),
                        ..PlayOptions::default()
                    };
                    let mut frames = Vec::new();
                    let report = self.play(options, |frame| frames.push(frame.to_string())).await?;
                    for frame in frames {
                        write!(output, "{}", frame)?;
                    }
                    writeln!(output, "({} ticks, {} ms)", report.ticks, self.session.timeline().position())?;
                }
                "explain" => match args.first() {
                    Some(word) => write!(output, "{}", self.explain(word))?,
                    None => writeln!(output, "usage: explain <word>")?,
                },
                "add" => match args.first() {
                    Some(word) => {
                        self.session.save_word(word);
                        writeln!(output, "{}：{}", self.session.t("added_vocab"), word)?;
                    }
                    None => writeln!(output, "usage: add <word>")?,
                },
                "remove" => match args.first() {
                    Some(word) => {
                        self.session.remove_word(word);
                        write!(output, "{}", self.render_vocabulary())?;
                    }
                    None => writeln!(output, "usage: remove <word>")?,
                },
                "vocab" => write!(output, "{}", self.render_vocabulary())?,
                "review" => self.run_review(input, output)?,
                "quiz" => {
                    if args.is_empty() {
                        self.run_quiz_interactive(input, output)?;
                    } else {
                        let answers: Vec<&str> = args.iter().copied().flat_map(|a| a.split(',')).collect();
                        write!(output, "{}", self.quiz(&answers))?;
                    }
                }
                "result" => match self.session.quiz_result() {
                    Some(result) => write!(output, "{}", render_quiz_result(result, self.session.language()))?,
                    None => writeln!(output, "-")?,
                },
                "retest" => self.session.reset_quiz(),
                "export" => {
                    let format = match args.first().copied() {
                        Some("srt") => ExportFormat::TimedCaptions,
                        Some("txt") => ExportFormat::PlainText,
                        _ => ExportFormat::All,
                    };
                    let dir = args.get(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
                    match self.export(format, &dir, true) {
                        Ok(paths) => {
                            for path in paths {
                                writeln!(output, "{}", path.display())?;
                            }
                        }
                        Err(e) => writeln!(output, "{}", e)?,
                    }
                }
                "lang" => match args.first().map(|code| InterfaceLanguage::from_code(code)) {
                    Some(Ok(language)) => {
                        self.session.set_language(language);
                        writeln!(output, "{} ({})", language.native_name(), language.code())?;
                    }
                    Some(Err(e)) => writeln!(output, "{}", e)?,
                    None => writeln!(output, "{}: {}", self.session.t("select_lang"), self.session.language())?,
                },
                "insight" => write!(output, "{}", self.render_insight())?,
                other => writeln!(output, "unknown command: {} (try 'help')", other)?,
            }
        }

        Ok(())
    }

    // Simple review: prompt each saved word, answers are recorded but not graded
    fn run_review<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let mut queue = self.session.vocabulary().review_queue(true);
        if queue.is_empty() {
            writeln!(output, "{}", self.session.t("no_vocab"))?;
            return Ok(());
        }

        writeln!(output, "## {}", self.session.t("review"))?;
        while let Some(word) = queue.pop_front() {
            write!(output, "{}: {}\n> ", self.session.t("review_prompt"), word)?;
            output.flush()?;

            let mut answer = String::new();
            if input.read_line(&mut answer)? == 0 {
                break;
            }
            debug!("Review answer for '{}': {}", word, answer.trim());
            if let Some(record) = self.session.vocabulary().get(&word) {
                writeln!(output, "  {}", record.explanation_for(self.session.language()))?;
            }
        }
        Ok(())
    }
}

const STUDY_HELP: &str = "commands: load [url] | show | seek <ms> | play [ticks] | explain <word> | add <word> | remove <word> | vocab | review | quiz [B,C,...] | result | retest | export [srt|txt] [dir] | lang [zh|ko|en] | insight | quit";

// Sequence numbers of the entries currently on screen (active or upcoming)
fn shown_entries(engine: &TimelineEngine) -> BTreeSet<usize> {
    let active: BTreeSet<usize> = engine.active_at_current().iter().map(|e| e.seq_num).collect();
    if active.is_empty() {
        engine.upcoming_at_current().map(|e| e.seq_num).into_iter().collect()
    } else {
        active
    }
}

/// Render one subtitle line with lexicon words emphasised
pub fn render_line(line: &str, lexicon: &Lexicon, use_color: bool) -> String {
    highlight(line, lexicon)
        .into_iter()
        .map(|t| match (t.highlighted, use_color) {
            (false, _) => t.token.text,
            (true, true) => format!("{}{}{}", HIGHLIGHT_ON, t.token.text, HIGHLIGHT_OFF),
            (true, false) => format!("**{}**", t.token.text),
        })
        .collect()
}

fn render_active_entry(out: &mut String, entry: &SubtitleEntry, lexicon: &Lexicon, language: InterfaceLanguage, use_color: bool) {
    let _ = writeln!(
        out,
        "[{} - {}] {}",
        format_short(entry.start_time_ms),
        format_short(entry.end_time_ms),
        render_line(&entry.original, lexicon, use_color)
    );
    let _ = writeln!(out, "  {}: {}", ui_text(language, "trans"), entry.translated);

    let words = lexicon_words(&entry.original, lexicon);
    if !words.is_empty() {
        let buttons: Vec<String> = words.iter().map(|w| format!("🔎 {}", w)).collect();
        let _ = writeln!(out, "  {}", buttons.join("  "));
    }
}

/// Render the subtitle area: active lines, else the next upcoming line, else a dash
pub fn render_subtitle_area(engine: &TimelineEngine, lexicon: &Lexicon, language: InterfaceLanguage, use_color: bool) -> String {
    let mut out = format!("### {} @ {}\n", ui_text(language, "subtitle_area"), format_short(engine.position()));

    let active = engine.active_at_current();
    if !active.is_empty() {
        for entry in active {
            render_active_entry(&mut out, entry, lexicon, language, use_color);
        }
        return out;
    }

    match engine.upcoming_at_current() {
        Some(entry) => {
            let _ = writeln!(out, "{}: {}", ui_text(language, "orig"), entry.original);
            let _ = writeln!(out, "{}: {}", ui_text(language, "trans"), entry.translated);
        }
        None => out.push_str("—\n"),
    }
    out
}

/// Render an explanation card
pub fn render_explanation(record: &ExplanationRecord, language: InterfaceLanguage) -> String {
    let mut out = format!("## {} — {}\n", ui_text(language, "explain"), record.word);
    let _ = writeln!(out, "{}", record.explanation_for(language));
    let _ = writeln!(out, "Lemma: {}", record.lemma);
    let _ = writeln!(out, "{}: {}", ui_text(language, "difficulty"), record.level);
    let _ = writeln!(out, "{}", record.grammar);
    out
}

/// Render a quiz score and band
pub fn render_quiz_result(result: &QuizResult, language: InterfaceLanguage) -> String {
    format!(
        "{}: {} / {}\n{}: {}\n",
        ui_text(language, "score"),
        result.score,
        result.total,
        ui_text(language, "level"),
        result.band.label(language)
    )
}
