//! Edit state shared by the forms backed by the guild's server data.

use dioxus::prelude::*;

use crate::{
    client::{
        hooks::{use_cached, Resource},
        model::save::SaveState,
    },
    model::server_data::{ServerDataDto, ServerDataPatchDto},
};

#[cfg(feature = "web")]
use crate::client::{
    api::settings::{get_settings, update_settings},
    hooks::use_fetch,
};

#[derive(Clone, Copy)]
pub struct SettingsForm {
    pub settings: Resource<ServerDataDto>,
    form: Signal<Option<ServerDataDto>>,
    pub save: Signal<SaveState>,
}

/// Loads the server data and keeps an editable copy, reseeded after each fetch.
pub fn use_settings_form(guild_id: u64) -> SettingsForm {
    let settings = use_cached::<ServerDataDto>();
    let mut form = use_signal(|| None::<ServerDataDto>);
    let save = use_signal(SaveState::default);

    #[cfg(feature = "web")]
    use_fetch(settings, move || get_settings(guild_id));

    use_effect(move || {
        if let Some(data) = settings.cache.read().data() {
            form.set(Some(data.clone()));
        }
    });

    SettingsForm {
        settings,
        form,
        save,
    }
}

impl SettingsForm {
    pub fn saved(&self) -> Option<ServerDataDto> {
        self.settings.cache.read().data().cloned()
    }

    pub fn edited(&self) -> Option<ServerDataDto> {
        self.form.read().clone()
    }

    /// Fields changed since the last fetch.
    pub fn patch(&self) -> ServerDataPatchDto {
        match (self.saved(), self.edited()) {
            (Some(saved), Some(edited)) => saved.diff(&edited),
            _ => ServerDataPatchDto::default(),
        }
    }

    pub fn edit(&mut self, change: impl FnOnce(&mut ServerDataDto)) {
        if let Some(form) = self.form.write().as_mut() {
            change(form);
        }
    }

    /// Discards the edits and clears a failed save.
    pub fn reset(&mut self) {
        let saved = self.saved();
        self.form.set(saved);
        self.save.write().reset();
    }

    /// PATCHes the changed fields and re-fetches on success.
    #[cfg_attr(not(feature = "web"), allow(unused_variables))]
    pub fn submit(&mut self, guild_id: u64) {
        let patch = self.patch();
        if patch.is_empty() || !self.save.write().begin() {
            return;
        }

        #[cfg(feature = "web")]
        {
            let mut this = *self;
            spawn(async move {
                let result = update_settings(guild_id, &patch).await;
                let succeeded = result.is_ok();
                this.save.write().settle(result);
                if succeeded {
                    this.settings.refresh();
                }
            });
        }
    }
}
