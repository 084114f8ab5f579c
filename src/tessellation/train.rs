use std::f64::consts::FRAC_PI_2;

use nalgebra::Rotation3;

use crate::curve::{CurveType, SampleTrack, TrackSample};
use crate::error::{Result, TessellationError};
use crate::math::{wrap_parameter, Matrix4, Point3, Vector3};
use crate::track::Track;

/// Size of the train body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainParams {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    /// Lift of the body floor above the centre line, so it rests on the ties.
    pub ride_height: f64,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            width: 5.0,
            length: 10.0,
            height: 5.0,
            ride_height: 0.75,
        }
    }
}

/// Where the train is along the loop and how fast it moves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrainClock {
    /// Track parameter of the train, kept in `[0, N)`.
    pub time: f64,
    /// Parameter units per second.
    pub speed: f64,
}

impl TrainClock {
    /// Creates a clock at parameter 0.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self { time: 0.0, speed }
    }

    /// Advances the train by `dt` seconds around a loop of `track_len` points
    /// and returns the new parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the loop is empty or the step is not finite.
    pub fn advance(&mut self, dt: f64, track_len: usize) -> Result<f64> {
        let next = self.time + self.speed * dt;
        if track_len == 0 || !next.is_finite() {
            return Err(TessellationError::InvalidParameters(format!(
                "cannot advance train to {next} on a loop of {track_len} points"
            ))
            .into());
        }
        self.time = wrap_parameter(next, track_len);
        Ok(self.time)
    }
}

/// Eye placement for the ride-along camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Point3,
    pub target: Point3,
    pub up: Vector3,
}

/// Everything a renderer needs to draw the train and ride along with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainPlacement {
    /// The track sample under the train.
    pub sample: TrackSample,
    /// Track frame at the train position.
    pub transform: Matrix4,
    /// Transform of a body modelled with its length along local `z`, width
    /// along `x` and floor at `y = 0`.
    pub body_transform: Matrix4,
    /// First-person camera, half a body height above the track.
    pub camera: CameraPose,
}

/// Computes the train placement at a track parameter.
pub struct PlaceTrain {
    t: f64,
    curve_type: CurveType,
    params: TrainParams,
}

impl PlaceTrain {
    /// Creates a new `PlaceTrain` query.
    #[must_use]
    pub fn new(t: f64, curve_type: CurveType, params: TrainParams) -> Self {
        Self {
            t,
            curve_type,
            params,
        }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the track cannot be sampled at the parameter.
    pub fn execute(&self, track: &Track) -> Result<TrainPlacement> {
        let sample = SampleTrack::new(self.t, self.curve_type).execute(track)?;
        let transform = sample.frame().to_matrix(&sample.position);

        // Turn the body so its length runs along the direction of travel.
        let body_transform = transform
            * Rotation3::from_axis_angle(&-Vector3::y_axis(), FRAC_PI_2).to_homogeneous()
            * Matrix4::new_translation(&Vector3::new(0.0, self.params.ride_height, 0.0));

        let eye = sample.position + sample.up * (self.params.height / 2.0);
        let camera = CameraPose {
            eye,
            target: eye + sample.tangent,
            up: sample.up,
        };

        Ok(TrainPlacement {
            sample,
            transform,
            body_transform,
            camera,
        })
    }
}
