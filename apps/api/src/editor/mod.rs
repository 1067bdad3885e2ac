// Editor sessions: one document per session, regenerated on every state change.
// Toggle-set semantics live in `toggle`; the session store and refinement flow in `session`.

pub mod handlers;
pub mod session;
pub mod toggle;
