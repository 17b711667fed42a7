use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// spinner on stderr. show == false gives a hidden bar, so callers can tick unconditionally
pub fn get_spin_pb(msg: String, show: bool) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    if !show {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb.set_style(ProgressStyle::with_template(
        "{spinner:.green} {msg} [{elapsed_precise}] {human_pos} ({per_sec})",
    )?);
    pb.set_message(msg);

    if show {
        pb.enable_steady_tick(Duration::from_millis(200));
    }
    Ok(pb)
}
