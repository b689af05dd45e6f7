//! Minimal host application: one bridge ticking between an in-memory
//! simulation store and a console animator. The simulation spawns late,
//! drives a small locomotion script, and reads the speed the player
//! reports back.

use std::sync::Arc;

use log::info;

use animsync_bridge::{Animator, Bridge, BridgeConfig, BridgeStatus};
use animsync_shared::{
    DiscoveryTag, IdentifierTable, InstanceId, MemoryStore, ParamId, ParamKind, ParamSchema,
    ParamValue, RecordId, SimStore, TagId,
};

const PLAYER_TAG: TagId = TagId::from_name("Player");
const PLAYER_INSTANCE: InstanceId = InstanceId::new(1);

const MOVE: ParamId = ParamId::from_name("Move");
const GROUNDED: ParamId = ParamId::from_name("Grounded");
const JUMP: ParamId = ParamId::from_name("Jump");
const SPEED: ParamId = ParamId::from_name("Speed");

fn param_name(id: ParamId) -> &'static str {
    match id {
        MOVE => "Move",
        GROUNDED => "Grounded",
        JUMP => "Jump",
        SPEED => "Speed",
        _ => "unknown",
    }
}

fn locomotion_table() -> Arc<IdentifierTable> {
    let mut schema = ParamSchema::new();
    schema
        .add_param("Move", ParamKind::Float)
        .add_param("Grounded", ParamKind::Bool)
        .add_param("Jump", ParamKind::Trigger)
        .add_return_channel("Speed", ParamKind::Float);
    Arc::new(IdentifierTable::build(&schema).expect("demo schema is valid"))
}

/// Stand-in for a real animation player: narrates every call it receives
/// and derives the speed it reports back from the last `Move` value.
struct ConsoleAnimator {
    move_drive: f32,
}

impl Animator for ConsoleAnimator {
    fn set_bool(&mut self, id: ParamId, value: bool) {
        info!("animator <- bool {} = {}", param_name(id), value);
    }

    fn set_int(&mut self, id: ParamId, value: i32) {
        info!("animator <- int {} = {}", param_name(id), value);
    }

    fn set_float(&mut self, id: ParamId, value: f32) {
        info!("animator <- float {} = {:.2}", param_name(id), value);
        if id == MOVE {
            self.move_drive = value;
        }
    }

    fn set_trigger(&mut self, id: ParamId) {
        info!("animator <- trigger {} raised", param_name(id));
    }

    fn reset_trigger(&mut self, id: ParamId) {
        info!("animator <- trigger {} cleared", param_name(id));
    }

    fn get_bool(&self, _id: ParamId) -> Option<bool> {
        None
    }

    fn get_int(&self, _id: ParamId) -> Option<i32> {
        None
    }

    fn get_float(&self, id: ParamId) -> Option<f32> {
        // blend-tree stand-in: the reported speed follows the Move drive
        (id == SPEED).then(|| self.move_drive * 2.4)
    }

    fn set_playback_rate(&mut self, rate: f32) {
        log::trace!("animator <- playback rate {:.2}", rate);
    }

    fn set_playback_enabled(&mut self, enabled: bool) {
        info!("animator <- playback enabled = {}", enabled);
    }
}

struct App {
    table: Arc<IdentifierTable>,
    store: MemoryStore,
    bridge: Bridge<RecordId>,
    animator: ConsoleAnimator,
    record: Option<RecordId>,
    last_status: BridgeStatus,
    tick: u32,
}

impl App {
    pub fn default() -> Self {
        info!("Basic Animsync Demo started");

        let table = locomotion_table();
        let bridge = Bridge::new(
            table.clone(),
            PLAYER_TAG,
            PLAYER_INSTANCE,
            BridgeConfig::default(),
        );

        App {
            table,
            store: MemoryStore::new(),
            bridge,
            animator: ConsoleAnimator { move_drive: 0.0 },
            record: None,
            last_status: BridgeStatus::Searching,
            tick: 0,
        }
    }

    pub fn update(&mut self) {
        self.run_simulation_script();

        let status = self.bridge.tick(&mut self.store, &mut self.animator);
        if status != self.last_status {
            info!("bridge status: {:?} -> {:?}", self.last_status, status);
            self.last_status = status;
        }

        self.consume_returned_speed();
        self.tick += 1;
    }

    /// What the simulation batch would do each frame: spawn late, push
    /// locomotion parameters, toggle the player around a stun window.
    fn run_simulation_script(&mut self) {
        match self.tick {
            2 => {
                let record = self
                    .store
                    .spawn_tagged(DiscoveryTag::new(PLAYER_TAG, PLAYER_INSTANCE));
                self.record = Some(record);
                info!("simulation spawned {}", record);
            }
            6 => {
                info!("simulation fires Jump");
                self.write_param(JUMP, ParamValue::Trigger(true));
            }
            8 => {
                info!("simulation disables the player");
                if let Some(state) = self.record.and_then(|r| self.store.bridge_state_mut(&r)) {
                    state.disabled = true;
                }
            }
            10 => {
                info!("simulation re-enables the player at half speed");
                if let Some(state) = self.record.and_then(|r| self.store.bridge_state_mut(&r)) {
                    state.disabled = false;
                    state.speed_scale = 0.5;
                }
            }
            _ => {}
        }

        // steady locomotion input once the exchange surface exists
        let drive = (self.tick as f32 * 0.08).min(1.0);
        self.write_param(MOVE, ParamValue::Float(drive));
        self.write_param(GROUNDED, ParamValue::Bool(true));
    }

    fn write_param(&mut self, id: ParamId, value: ParamValue) {
        let Some(record) = self.record else {
            return;
        };
        let Some(buffer) = self.store.param_buffer_mut(&record) else {
            return;
        };
        if let Some(index) = self.table.index_of(id) {
            buffer.cell_mut(index).write(value);
        }
    }

    fn consume_returned_speed(&mut self) {
        let Some(record) = self.record else {
            return;
        };
        let Some(buffer) = self.store.param_buffer_mut(&record) else {
            return;
        };
        let Some(index) = self.table.index_of(SPEED) else {
            return;
        };
        if let Some(ParamValue::Float(speed)) = buffer.cell_mut(index).try_consume() {
            info!("simulation <- returned speed {:.2}", speed);
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut app = App::default();
    for _ in 0..14 {
        app.update();
    }
}
