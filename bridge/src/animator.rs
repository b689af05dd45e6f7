use animsync_shared::ParamId;

/// The animation-player surface the synchronizer drives.
///
/// Implementations address parameters by [`ParamId`]; how an id resolves to
/// the player's own naming is the integration's business. Setters are
/// fire-and-forget. Getters back the schema's return channels and answer
/// `None` for a parameter the player does not expose, which the
/// synchronizer treats as a once-logged fault on that channel.
pub trait Animator {
    fn set_bool(&mut self, id: ParamId, value: bool);

    fn set_int(&mut self, id: ParamId, value: i32);

    fn set_float(&mut self, id: ParamId, value: f32);

    /// Raises a one-shot trigger. The synchronizer clears it again on the
    /// following enabled cycle via [`Self::reset_trigger`].
    fn set_trigger(&mut self, id: ParamId);

    fn reset_trigger(&mut self, id: ParamId);

    fn get_bool(&self, id: ParamId) -> Option<bool>;

    fn get_int(&self, id: ParamId) -> Option<i32>;

    fn get_float(&self, id: ParamId) -> Option<f32>;

    /// Playback rate multiplier; 1.0 is authored speed.
    fn set_playback_rate(&mut self, rate: f32);

    /// Suspends or resumes playback wholesale.
    fn set_playback_enabled(&mut self, enabled: bool);
}
