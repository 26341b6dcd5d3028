use std::sync::Arc;

use docnote_core::analytics::summarize_analytics;
use docnote_core::forms::NewPatientForm;
use docnote_core::models::analytics::TimeRange;
use docnote_core::recent::{NoteFilter, NoteSort, recent_notes};
use docnote_core::search::filter_patients;
use docnote_export::format::ExportFormat;
use docnote_export::sheet::ExportSheet;
use docnote_intake::controller::IntakeController;
use docnote_intake::finalize::NoteFinalizer;
use docnote_intake::mount::{MountHandle, mount};
use docnote_intake::navigation::{Navigator, PatientDetailsParams, Route};
use docnote_intake::session::RecordingState;
use docnote_intake::summarize::Summarizer;
use docnote_storage::repository::Repository;
use tracing::debug;

use crate::command::{Command, FormField};
use crate::render;

/// What the input loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Tab root plus the screens pushed over it.
#[derive(Debug)]
pub struct ScreenStack {
    root: Route,
    pushed: Vec<Route>,
}

impl Default for ScreenStack {
    fn default() -> Self {
        Self {
            root: Route::Home,
            pushed: Vec::new(),
        }
    }
}

impl ScreenStack {
    pub fn current(&self) -> &Route {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Switch tabs, dropping everything pushed on the old one.
    pub fn reset(&mut self, root: Route) {
        self.root = root;
        self.pushed.clear();
    }

    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }
}

impl Navigator for ScreenStack {
    /// Navigating to the screen already on top does nothing.
    fn navigate(&mut self, route: Route) {
        if *self.current() == route {
            return;
        }
        debug!(screen = route.name(), "navigate");
        self.pushed.push(route);
    }

    fn go_back(&mut self) -> bool {
        self.pushed.pop().is_some()
    }
}

struct MountedIntake {
    controller: IntakeController,
    // Dropped together with the controller, which unmounts it.
    _handle: MountHandle,
}

/// The app's screens, driven one command at a time.
pub struct Shell {
    repo: Arc<dyn Repository>,
    summarizer: Arc<dyn Summarizer>,
    finalizer: Arc<NoteFinalizer>,
    trainer_name: String,
    today: jiff::civil::Date,
    stack: ScreenStack,
    intake: Option<MountedIntake>,
    export: ExportSheet,
    form: NewPatientForm,
    patient_query: String,
    note_filter: NoteFilter,
    note_sort: NoteSort,
    range: TimeRange,
}

impl Shell {
    pub fn new(
        repo: Arc<dyn Repository>,
        summarizer: Arc<dyn Summarizer>,
        trainer_name: impl Into<String>,
        today: jiff::civil::Date,
    ) -> Self {
        Self {
            repo,
            summarizer,
            finalizer: Arc::new(NoteFinalizer::new()),
            trainer_name: trainer_name.into(),
            today,
            stack: ScreenStack::default(),
            intake: None,
            export: ExportSheet::new(),
            form: NewPatientForm::default(),
            patient_query: String::new(),
            note_filter: NoteFilter::default(),
            note_sort: NoteSort::default(),
            range: TimeRange::default(),
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.current()
    }

    pub fn stack(&self) -> &ScreenStack {
        &self.stack
    }

    pub fn intake(&self) -> Option<&IntakeController> {
        self.intake.as_ref().map(|m| &m.controller)
    }

    pub async fn handle_line(&mut self, line: &str) -> eyre::Result<Outcome> {
        let command: Command = line.parse()?;
        self.handle(command).await
    }

    pub async fn handle(&mut self, command: Command) -> eyre::Result<Outcome> {
        let note = match command {
            Command::Help => return Ok(Outcome::Continue(render::help())),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Back => {
                if !self.stack.go_back() {
                    return Ok(Outcome::Continue("Already at the top.".to_string()));
                }
                None
            }
            Command::Home => {
                self.stack.reset(Route::Home);
                None
            }
            Command::Patients { query } => {
                self.patient_query = query;
                self.stack.reset(Route::Patients);
                None
            }
            Command::Recent { filter, sort } => {
                self.note_filter = filter;
                self.note_sort = sort;
                self.stack.reset(Route::RecentNotes);
                None
            }
            Command::Analytics { range } => {
                self.range = range;
                self.stack.reset(Route::Analytics);
                None
            }
            Command::Patient { id } => {
                let patient = self.repo.get_patient(&id).await?;
                self.stack.navigate(Route::PatientDetails(PatientDetailsParams {
                    patient,
                    new_note: None,
                    highlight_note_id: None,
                }));
                None
            }
            Command::Note { id } => self.open_note(&id).await?,
            Command::NewNote => {
                self.stack.navigate(Route::NewSoapNote);
                None
            }
            Command::Record => {
                let state = self.intake_mut()?.toggle_recording().await?;
                Some(match state {
                    RecordingState::Recording => "Recording started.".to_string(),
                    RecordingState::Idle => "Recording stopped, summary updated.".to_string(),
                })
            }
            Command::Say(text) => {
                self.intake_mut()?.feed_transcript(&text)?;
                None
            }
            Command::Type(text) => {
                self.intake_mut()?.edit_dictation(text)?;
                None
            }
            Command::Save => {
                self.intake_mut()?.open_picker().await?;
                None
            }
            Command::Pick { id } => {
                let route = self.intake_mut()?.select_patient(&id).await?;
                // The note screen is replaced, not kept under the patient.
                self.stack.go_back();
                self.stack.navigate(route);
                Some("SOAP note saved.".to_string())
            }
            Command::Cancel => {
                if let Some(m) = self.intake.as_mut() {
                    m.controller.dismiss_picker();
                }
                self.export.dismiss();
                None
            }
            Command::Export(format) => self.export(format)?,
            Command::NewPatient => {
                if !matches!(self.current(), Route::NewPatient) {
                    self.form = NewPatientForm::default();
                }
                self.stack.navigate(Route::NewPatient);
                None
            }
            Command::Set { field, value } => {
                self.require_screen(matches!(self.current(), Route::NewPatient), "new patient")?;
                self.set_field(field, value);
                None
            }
            Command::Submit => {
                self.require_screen(matches!(self.current(), Route::NewPatient), "new patient")?;
                let patient = self.form.clone().into_patient()?;
                let name = patient.name.clone();
                self.repo.add_patient(patient).await?;
                self.form = NewPatientForm::default();
                self.stack.go_back();
                Some(format!("Saved patient {name}."))
            }
        };

        self.sync_mounts();
        let screen = self.render().await?;
        Ok(Outcome::Continue(match note {
            Some(note) => format!("{note}\n\n{screen}"),
            None => screen,
        }))
    }

    /// Render whatever screen is on top.
    pub async fn render(&self) -> eyre::Result<String> {
        let out = match self.stack.current().clone() {
            Route::Home => {
                let patients = self.repo.list_patients().await?;
                let notes = self.repo.list_notes().await?;
                let summary = summarize_analytics(&patients, &notes, TimeRange::Week, self.today);
                render::home(&self.trainer_name, &summary, notes.len())
            }
            Route::Patients => {
                let patients = self.repo.list_patients().await?;
                render::patients(
                    &filter_patients(&patients, &self.patient_query),
                    &self.patient_query,
                )
            }
            Route::RecentNotes => {
                let patients = self.repo.list_patients().await?;
                let notes = self.repo.list_notes().await?;
                let rows = recent_notes(
                    &notes,
                    &patients,
                    self.note_filter,
                    self.note_sort,
                    self.today,
                );
                render::recent(&rows, self.note_filter, self.note_sort)
            }
            Route::Analytics => {
                let patients = self.repo.list_patients().await?;
                let notes = self.repo.list_notes().await?;
                render::analytics(&summarize_analytics(
                    &patients, &notes, self.range, self.today,
                ))
            }
            Route::NewSoapNote => match self.intake() {
                Some(intake) => {
                    let picker = intake.picker();
                    render::intake(
                        intake.session(),
                        picker.is_open().then(|| picker.patients()),
                    )
                }
                None => String::new(),
            },
            Route::PatientDetails(params) => {
                let notes = self.repo.notes_for_patient(&params.patient.id).await?;
                let highlight = params
                    .new_note
                    .as_ref()
                    .map(|n| n.id.as_str())
                    .or(params.highlight_note_id.as_deref());
                render::patient_details(&params.patient, &notes, highlight)
            }
            Route::SoapNoteDetails { note } => {
                let mut out = render::note_details(&note);
                if self.export.is_open() {
                    out.push('\n');
                    out.push_str(&render::export_sheet(&ExportFormat::ALL));
                }
                out
            }
            Route::NewPatient => render::new_patient(&self.form),
        };
        Ok(out)
    }

    /// From the recent list a note id opens its patient with the note
    /// highlighted; anywhere else it opens the note itself.
    async fn open_note(&mut self, id: &str) -> eyre::Result<Option<String>> {
        let note = self.repo.get_note(id).await?;
        if matches!(self.current(), Route::RecentNotes) {
            let patient = self.repo.get_patient(&note.patient_id).await?;
            self.stack.navigate(Route::PatientDetails(PatientDetailsParams {
                patient,
                new_note: None,
                highlight_note_id: Some(note.id),
            }));
        } else {
            self.stack.navigate(Route::SoapNoteDetails { note });
        }
        Ok(None)
    }

    fn export(
        &mut self,
        format: Option<ExportFormat>,
    ) -> eyre::Result<Option<String>> {
        let Route::SoapNoteDetails { note } = self.stack.current() else {
            return Err(eyre::eyre!("open a note first (`note <id>`)"));
        };
        let Some(format) = format else {
            self.export.present();
            return Ok(None);
        };
        let note = note.clone();
        if !self.export.is_open() {
            self.export.present();
        }
        self.export.choose(&note, format)?;
        Ok(Some(format!("Exporting as {}.", format.name())))
    }

    fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.form.name,
            FormField::Sport => &mut self.form.sport,
            FormField::Team => &mut self.form.team,
            FormField::Age => &mut self.form.age,
            FormField::Gender => &mut self.form.gender,
            FormField::ContactNumber => &mut self.form.contact_number,
            FormField::EmergencyContact => &mut self.form.emergency_contact,
        };
        *slot = value;
    }

    fn require_screen(&self, on_screen: bool, name: &str) -> eyre::Result<()> {
        if on_screen {
            Ok(())
        } else {
            Err(eyre::eyre!("only available on the {name} screen"))
        }
    }

    fn intake_mut(&mut self) -> eyre::Result<&mut IntakeController> {
        self.intake
            .as_mut()
            .map(|m| &mut m.controller)
            .ok_or_else(|| eyre::eyre!("only available on the new note screen (`new-note`)"))
    }

    /// Mount the intake controller while its screen is on top and drop it
    /// as soon as it is not. Leaving a note closes its export sheet.
    fn sync_mounts(&mut self) {
        let on_intake = matches!(self.stack.current(), Route::NewSoapNote);
        match (on_intake, self.intake.is_some()) {
            (true, false) => {
                let (handle, mounted) = mount();
                let controller = IntakeController::new(
                    self.repo.clone(),
                    self.summarizer.clone(),
                    self.finalizer.clone(),
                    mounted,
                );
                self.intake = Some(MountedIntake {
                    controller,
                    _handle: handle,
                });
                debug!("intake screen mounted");
            }
            (false, true) => {
                self.intake = None;
                debug!("intake screen unmounted");
            }
            _ => {}
        }

        if !matches!(self.stack.current(), Route::SoapNoteDetails { .. }) {
            self.export.dismiss();
        }
    }
}
