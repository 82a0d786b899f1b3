use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::{
    error::{AppError, AppResult},
    form::{AccountForm, FormTarget, SubmitPayload},
    models::farmer::{Farmer, FarmerFields},
    models::form::FormMode,
    models::jsonwebtoken::AuthContext,
    repositories::farmer::FarmerRepository,
    services::form::{FarmerFormService, FormChanges, FormId, FormSession, OpenForm, Submitted},
};

/// Sessions untouched for longer than this are dropped when the next form opens.
pub const FORM_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

type Sessions = Mutex<HashMap<FormId, FormSession>>;

pub struct FarmerFormServiceImpl {
    repository: Arc<dyn FarmerRepository>,
    sessions: Arc<Sessions>,
    idle_timeout: Duration,
}

impl FarmerFormServiceImpl {
    pub fn new(repository: Arc<dyn FarmerRepository>) -> Self {
        Self::with_idle_timeout(repository, FORM_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(repository: Arc<dyn FarmerRepository>, idle_timeout: Duration) -> Self {
        Self {
            repository,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Runs `action` against the caller's session and marks it as used.
    async fn with_session<T>(
        &self,
        auth: &AuthContext,
        id: FormId,
        action: impl FnOnce(&mut FormSession) -> AppResult<T> + Send,
    ) -> AppResult<T> {
        let mut sessions = self.sessions.lock().await;

        match sessions.get_mut(&id) {
            Some(session) if session.owner == auth.user_id() => {
                session.last_seen = Instant::now();
                action(session)
            }
            _ => Err(AppError::NotFound("Form not found")),
        }
    }

    async fn initial_fields(
        &self,
        auth: &AuthContext,
        request: &mut OpenForm,
    ) -> AppResult<(FormTarget, FarmerFields)> {
        match (request.mode, request.farmer_id) {
            (FormMode::Create, None) => Ok((
                FormTarget::Create,
                request.initial.take().unwrap_or_default(),
            )),
            (FormMode::Create, Some(_)) => Err(AppError::BadRequest(
                "A new farmer cannot reference an existing record",
            )),
            (FormMode::Edit, None) => Err(AppError::BadRequest(
                "Editing requires the farmer's identifier",
            )),
            (FormMode::Edit, Some(id)) => {
                let fields = match request.initial.take() {
                    Some(fields) => fields,
                    None => self.repository.get(auth, id).await?.into(),
                };
                Ok((FormTarget::Edit(id), fields))
            }
        }
    }
}

async fn send(
    repository: &dyn FarmerRepository,
    auth: &AuthContext,
    payload: SubmitPayload,
) -> AppResult<(Farmer, &'static str)> {
    match payload {
        SubmitPayload::Create(fields) => Ok((
            repository.create(auth, fields).await?,
            "Farmer created successfully.",
        )),
        SubmitPayload::Update(farmer_id, update) => Ok((
            repository.update(auth, farmer_id, update).await?,
            "Farmer updated successfully.",
        )),
    }
}

/// Writes the outcome of a submission back into the session store.
async fn settle(
    sessions: &Sessions,
    id: FormId,
    result: AppResult<(Farmer, &'static str)>,
) -> AppResult<Submitted> {
    let mut sessions = sessions.lock().await;

    match result {
        Ok((farmer, message)) => {
            sessions.remove(&id);
            tracing::info!(farmer = farmer.id, "{message}");
            Ok(Submitted { farmer, message })
        }
        Err(error) => {
            if let Some(session) = sessions.get_mut(&id) {
                session.form.fail_submit(error.message.clone());
            }
            tracing::warn!(code = error.code, "farmer submission rejected: {}", error.message);
            Err(error)
        }
    }
}

#[async_trait]
impl FarmerFormService for FarmerFormServiceImpl {
    #[tracing::instrument(skip(self, auth, request), fields(mode = ?request.mode))]
    async fn open(&self, auth: &AuthContext, mut request: OpenForm) -> AppResult<FormSession> {
        let (target, fields) = self.initial_fields(auth, &mut request).await?;

        let session = FormSession {
            id: Uuid::new_v4(),
            owner: auth.user_id(),
            form: AccountForm::open(target, fields),
            last_seen: Instant::now(),
        };

        let mut sessions = self.sessions.lock().await;

        let before = sessions.len();
        sessions.retain(|_, existing| {
            existing.form.is_saving() || existing.last_seen.elapsed() < self.idle_timeout
        });
        if sessions.len() < before {
            tracing::debug!(evicted = before - sessions.len(), "idle account forms dropped");
        }

        sessions.insert(session.id, session.clone());

        tracing::info!(form = %session.id, "account form opened");

        Ok(session)
    }

    async fn get(&self, auth: &AuthContext, id: FormId) -> AppResult<FormSession> {
        self.with_session(auth, id, |session| Ok(session.clone()))
            .await
    }

    async fn update(
        &self,
        auth: &AuthContext,
        id: FormId,
        changes: FormChanges,
    ) -> AppResult<FormSession> {
        self.with_session(auth, id, |session| {
            session
                .form
                .apply(changes.validation_mode, changes.fields)?;
            Ok(session.clone())
        })
        .await
    }

    async fn next(&self, auth: &AuthContext, id: FormId) -> AppResult<FormSession> {
        self.with_session(auth, id, |session| {
            session.form.next()?;
            Ok(session.clone())
        })
        .await
    }

    async fn back(&self, auth: &AuthContext, id: FormId) -> AppResult<FormSession> {
        self.with_session(auth, id, |session| {
            session.form.back()?;
            Ok(session.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self, auth), fields(form = %id))]
    async fn submit(&self, auth: &AuthContext, id: FormId) -> AppResult<Submitted> {
        let payload = self
            .with_session(auth, id, |session| Ok(session.form.begin_submit()?))
            .await?;

        // The session stays busy until the detached call settles it, even if
        // this request is dropped first.
        let repository = Arc::clone(&self.repository);
        let sessions = Arc::clone(&self.sessions);
        let auth = auth.clone();

        let call = tokio::spawn(
            async move {
                let result = send(repository.as_ref(), &auth, payload).await;
                settle(&sessions, id, result).await
            }
            .in_current_span(),
        );

        match call.await {
            Ok(outcome) => outcome,
            Err(error) => {
                let error = AppError::InternalError().trace(&error.to_string());
                settle(&self.sessions, id, Err(error)).await
            }
        }
    }

    async fn close(&self, auth: &AuthContext, id: FormId) -> AppResult<()> {
        let mut sessions = self.sessions.lock().await;

        match sessions.get(&id) {
            Some(session) if session.owner == auth.user_id() => {
                if session.form.is_saving() {
                    return Err(AppError::Conflict("A submission is already in progress"));
                }
                sessions.remove(&id);
                Ok(())
            }
            _ => Err(AppError::NotFound("Form not found")),
        }
    }
}
