//! Startup and teardown of a whole game.
use crate::error::Error;
use crate::game::Config;
use crate::game::Event;
use crate::game::Room;
use crate::game::Surface;
use crate::inference::Classifier;
use crate::inference::Handle;
use crate::network::Checkpoint;
use crate::network::Network;
use crate::network::Runtime;
use crate::vision::Camera;
use tokio::task::JoinHandle;

/// A running game: the prediction loop feeding a room.
///
/// Startup order matters. The camera must grant access first, then the
/// checkpoint must load, and only then does the loop begin, so no frame
/// is ever classified against missing weights.
pub struct Session {
    inference: Handle,
    room: JoinHandle<()>,
}

impl Session {
    pub async fn launch<C, R, S>(
        mut camera: C,
        runtime: R,
        checkpoint: &Checkpoint,
        mut surface: S,
        config: Config,
    ) -> Result<Self, Error>
    where
        C: Camera,
        R: Runtime + 'static,
        S: Surface + 'static,
    {
        log::info!("{:<32}{:<32}", "requesting camera", config.constraints);
        let feed = match camera.request_access(config.constraints).await {
            Ok(feed) => feed,
            Err(e) => {
                log::error!("{}", e);
                surface.notify(&Event::Unavailable(e)).await;
                return Err(e.into());
            }
        };
        let network = Network::load(runtime, checkpoint).await?;
        let interval = config.interval;
        let (observations, rx) = tokio::sync::mpsc::unbounded_channel();
        let room = tokio::spawn(Room::new(surface, config).run(rx));
        let inference = Classifier::new(network, feed).start_with(interval, move |gesture| {
            if observations.send(gesture).is_err() {
                log::warn!("[session] room closed, dropping {}", gesture);
            }
        });
        Ok(Self { inference, room })
    }

    /// Tear down: stop predicting, then let the room wind down.
    pub async fn stop(self) {
        self.inference.stop().await;
        if let Err(e) = self.room.await {
            log::warn!("room ended abnormally: {}", e);
        }
        log::info!("session over");
    }
}
