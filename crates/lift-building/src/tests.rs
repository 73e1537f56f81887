//! Unit tests for lift-building.

#[cfg(test)]
mod support {
    use lift_core::{RiderId, SimRng, Tick};
    use lift_rider::RiderKind;

    use crate::{Building, BuildingEvents, TickContext};

    #[derive(Default, Debug)]
    pub struct Recorder {
        pub entered:    Vec<RiderId>,
        pub joined:     Vec<(RiderId, Tick)>,
        pub served:     Vec<(RiderId, Tick)>,
        pub complaints: Vec<RiderId>,
        pub exited:     Vec<RiderId>,
    }

    impl BuildingEvents for Recorder {
        fn rider_entered(&mut self, rider: RiderId, _now: Tick) {
            self.entered.push(rider);
        }
        fn queue_joined(&mut self, rider: RiderId, now: Tick) {
            self.joined.push((rider, now));
        }
        fn serving_started(&mut self, rider: RiderId, now: Tick) {
            self.served.push((rider, now));
        }
        fn complaint_filed(&mut self, rider: RiderId, _now: Tick) {
            self.complaints.push(rider);
        }
        fn rider_exited(&mut self, rider: RiderId, _now: Tick) {
            self.exited.push(rider);
        }
    }

    /// A building driven tick by tick with its own RNG and event log.
    pub struct Harness {
        pub building: Building,
        pub rng:      SimRng,
        pub events:   Recorder,
        pub now:      Tick,
    }

    impl Harness {
        pub fn new(floors: i64, capacity: i64, p: f64) -> Self {
            Self {
                building: Building::new(floors, capacity, p).unwrap(),
                rng: SimRng::new(0),
                events: Recorder::default(),
                now: Tick::ZERO,
            }
        }

        /// Run `f` with a context for the current tick.
        pub fn with<R>(&mut self, f: impl FnOnce(&mut Building, &mut TickContext<'_>) -> R) -> R {
            let mut ctx = TickContext::new(self.now, &mut self.rng, &mut self.events);
            f(&mut self.building, &mut ctx)
        }

        pub fn admit(&mut self, kind: RiderKind) -> RiderId {
            self.with(|b, ctx| {
                let id = b.spawn(kind);
                assert!(b.enter(id, ctx));
                id
            })
        }

        pub fn tick(&mut self) {
            self.with(|b, ctx| b.tick(ctx));
            self.now = self.now.next();
        }

        pub fn run(&mut self, n: u64) {
            for _ in 0..n {
                self.tick();
            }
        }
    }
}

#[cfg(test)]
mod floor {
    use lift_core::{FloorId, RiderId};
    use lift_rider::{Rider, RiderKind};

    use crate::Floor;

    fn rider(id: u32, kind: RiderKind) -> Rider {
        Rider::new(RiderId(id), format!("R{id}"), kind, 7)
    }

    #[test]
    fn land_once() {
        let mut ground = Floor::new(FloorId::GROUND);
        let r = rider(0, RiderKind::NonDeveloper);
        assert!(ground.land(&r));
        assert!(!ground.land(&r));
        assert_eq!(ground.present(), &[RiderId(0)]);
    }

    #[test]
    fn land_requires_matching_floor() {
        let mut top = Floor::new(FloorId(6));
        assert!(!top.land(&rider(0, RiderKind::Goggle)));
        assert!(top.present().is_empty());
    }

    #[test]
    fn queued_rider_cannot_land() {
        let mut ground = Floor::new(FloorId::GROUND);
        let r = rider(0, RiderKind::NonDeveloper);
        ground.land(&r);
        ground.join_queue(&r).unwrap();
        assert!(!ground.land(&r));
    }

    #[test]
    fn leave_from_either_container() {
        let mut ground = Floor::new(FloorId::GROUND);
        let a = rider(0, RiderKind::NonDeveloper);
        let b = rider(1, RiderKind::NonDeveloper);
        ground.land(&a);
        ground.land(&b);
        ground.join_queue(&b);
        assert!(ground.leave(a.id()));
        assert!(ground.leave(b.id()));
        assert!(!ground.leave(b.id()));
        assert!(ground.present().is_empty());
        assert!(ground.queue().is_empty());
    }

    #[test]
    fn join_queue_unknown_rider_is_noop() {
        let mut ground = Floor::new(FloorId::GROUND);
        assert_eq!(ground.join_queue(&rider(0, RiderKind::Client)), None);
        assert_eq!(ground.tickets_issued(), 0);
        assert!(ground.queue().is_empty());
    }

    #[test]
    fn clients_jump_the_queue() {
        let mut ground = Floor::new(FloorId::GROUND);
        let nd = rider(0, RiderKind::NonDeveloper);
        let cl = rider(1, RiderKind::Client);
        let gg = rider(2, RiderKind::Goggle);
        let cl2 = rider(3, RiderKind::Client);
        for r in [&nd, &cl, &gg, &cl2] {
            ground.land(r);
            ground.join_queue(r);
        }
        let order: Vec<RiderId> = ground.queued_riders().collect();
        assert_eq!(order, vec![cl.id(), cl2.id(), nd.id(), gg.id()]);
        let tickets: Vec<u64> = ground.queue().iter().map(|e| e.ticket).collect();
        assert_eq!(tickets, vec![1, 3, 0, 2]);
    }

    #[test]
    fn rejoin_moves_to_back_with_new_ticket() {
        let mut ground = Floor::new(FloorId::GROUND);
        let a = rider(0, RiderKind::Goggle);
        let b = rider(1, RiderKind::Mugtome);
        ground.land(&a);
        ground.land(&b);
        assert_eq!(ground.join_queue(&a), Some(0));
        assert_eq!(ground.join_queue(&b), Some(1));
        assert_eq!(ground.join_queue(&a), Some(2));
        let order: Vec<RiderId> = ground.queued_riders().collect();
        assert_eq!(order, vec![b.id(), a.id()]);
        assert!(!ground.is_present(a.id()));
    }

    #[test]
    fn display() {
        assert_eq!(Floor::new(FloorId::GROUND).to_string(), "Floor G");
        assert_eq!(Floor::new(FloorId(3)).to_string(), "Floor 3");
    }
}

#[cfg(test)]
mod construction {
    use lift_core::ConfigError;

    use crate::{Building, Direction, DoorState, Elevator};

    #[test]
    fn rejects_no_floors() {
        assert_eq!(Building::new(0, 4, 0.0).unwrap_err(), ConfigError::InvalidFloorCount(0));
        assert_eq!(Building::new(-3, 4, 0.0).unwrap_err(), ConfigError::InvalidFloorCount(-3));
    }

    #[test]
    fn floors_checked_before_capacity() {
        assert_eq!(Building::new(0, 0, 0.0).unwrap_err(), ConfigError::InvalidFloorCount(0));
        assert_eq!(Building::new(7, 0, 0.0).unwrap_err(), ConfigError::InvalidCapacity(0));
    }

    #[test]
    fn elevator_starts_idle_on_ground() {
        let e = Elevator::new(4).unwrap();
        assert_eq!(e.capacity(), 4);
        assert_eq!(e.available_space(), 4);
        assert!(e.current_floor().is_ground());
        assert_eq!(e.direction(), Direction::Up);
        assert_eq!(e.doors(), DoorState::Closed);
        assert!(e.passengers().is_empty());
        assert_eq!(e.to_string(), "elevator at Floor G, going UP, doors CLOSED, 4/4 free");
    }

    #[test]
    fn rejects_floor_count_beyond_id_range() {
        let too_many = i64::from(u32::MAX) + 1;
        assert_eq!(
            Building::new(too_many, 4, 0.0).unwrap_err(),
            ConfigError::InvalidFloorCount(too_many)
        );
        assert_eq!(Building::new(i64::MAX, 4, 0.0).unwrap_err(), ConfigError::InvalidFloorCount(i64::MAX));
    }

    #[test]
    fn single_floor_building_is_valid() {
        let b = Building::new(1, 1, 0.0).unwrap();
        assert_eq!(b.floor_count(), 1);
    }
}

#[cfg(test)]
mod boundary {
    use lift_core::{FloorId, RiderId};
    use lift_rider::{Placement, RiderKind};

    use super::support::Harness;

    #[test]
    fn entering_rider_lands_and_queues() {
        let mut h = Harness::new(7, 4, 0.0);
        let id = h.admit(RiderKind::Goggle);
        assert_eq!(h.events.entered, vec![id]);
        // Goggles only reach the upper half, so the first request is never
        // the ground floor.
        assert_eq!(h.building.placement(id), Placement::Queued(FloorId::GROUND));
        assert_eq!(h.events.joined.len(), 1);
    }

    #[test]
    fn cannot_enter_twice() {
        let mut h = Harness::new(7, 4, 0.0);
        let id = h.admit(RiderKind::Goggle);
        assert!(!h.with(|b, ctx| b.enter(id, ctx)));
        assert_eq!(h.events.entered.len(), 1);
    }

    #[test]
    fn spawned_rider_waits_outside() {
        let mut h = Harness::new(7, 4, 0.0);
        let id = h.with(|b, _| b.spawn(RiderKind::Client));
        assert_eq!(h.building.placement(id), Placement::Outside);
        assert_eq!(h.building.spawned(RiderKind::Client), 1);
        assert_eq!(h.building.rider(id).unwrap().label(), "CL01");
    }

    #[test]
    fn quit_from_ground() {
        let mut h = Harness::new(7, 4, 0.0);
        let id = h.admit(RiderKind::Client);
        assert!(h.with(|b, ctx| b.quit(id, ctx)));
        assert_eq!(h.building.placement(id), Placement::Departed);
        assert_eq!(h.events.exited, vec![id]);
        assert!(!h.with(|b, ctx| b.quit(id, ctx)));
    }

    #[test]
    fn passenger_cannot_quit() {
        let mut h = Harness::new(7, 4, 0.0);
        let id = h.admit(RiderKind::MaintenanceCrew);
        h.run(2);
        assert_eq!(h.building.placement(id), Placement::Aboard(FloorId::GROUND));
        assert!(!h.with(|b, ctx| b.quit(id, ctx)));
        assert!(h.events.exited.is_empty());
    }

    #[test]
    fn request_for_current_floor_is_done_in_place() {
        let mut h = Harness::new(5, 4, 0.0);
        let id = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        assert!(h.building.land(id));
        h.with(|b, ctx| b.request_floor(id, Some(FloorId::GROUND), ctx));
        assert_eq!(h.building.placement(id), Placement::OnFloor(FloorId::GROUND));
        assert!(h.building.rider(id).unwrap().request().unwrap().is_done());
        assert!(h.events.joined.is_empty());
    }

    #[test]
    fn request_for_other_floor_queues() {
        let mut h = Harness::new(5, 4, 0.0);
        let id = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        h.building.land(id);
        h.with(|b, ctx| b.request_floor(id, Some(FloorId(4)), ctx));
        assert_eq!(h.building.placement(id), Placement::Queued(FloorId::GROUND));
    }

    #[test]
    fn rejected_request_keeps_previous_state() {
        let mut h = Harness::new(7, 4, 0.0);
        let id = h.with(|b, _| b.spawn(RiderKind::Goggle));
        h.building.land(id);
        h.with(|b, ctx| b.request_floor(id, Some(FloorId(1)), ctx));
        h.with(|b, ctx| b.request_floor(id, None, ctx));
        assert!(h.building.rider(id).unwrap().request().is_none());
        assert_eq!(h.building.placement(id), Placement::OnFloor(FloorId::GROUND));
    }

    #[test]
    fn unknown_rider_is_ignored() {
        let mut h = Harness::new(7, 4, 0.0);
        let ghost = RiderId(99);
        assert!(!h.with(|b, ctx| b.join_queue(ghost, ctx)));
        h.with(|b, ctx| b.request_floor(ghost, Some(FloorId(3)), ctx));
        assert!(!h.with(|b, ctx| b.quit(ghost, ctx)));
        assert!(!h.with(|b, ctx| b.enter(ghost, ctx)));
        assert!(!h.building.land(ghost));
        assert_eq!(h.building.placement(ghost), Placement::Outside);
        assert!(h.events.joined.is_empty());
        assert!(h.events.exited.is_empty());
        assert!(h.building.floors().iter().all(|f| f.present().is_empty() && f.queue().is_empty()));
    }
}

#[cfg(test)]
mod dispatch {
    use lift_core::{FloorId, RiderId};
    use lift_rider::{Placement, RiderKind};

    use super::support::Harness;
    use crate::{Direction, DoorState};

    fn queued_at(h: &Harness, floor: FloorId) -> Vec<RiderId> {
        h.building.floor(floor).unwrap().queued_riders().collect()
    }

    #[test]
    fn queue_is_served_on_second_tick() {
        let mut h = Harness::new(7, 4, 0.0);
        for _ in 0..3 {
            h.admit(RiderKind::Goggle);
        }
        h.tick();
        assert_eq!(h.building.elevator().doors(), DoorState::Open);
        let before = queued_at(&h, FloorId::GROUND);
        h.tick();
        assert!(queued_at(&h, FloorId::GROUND).is_empty());
        assert_eq!(h.building.elevator().passengers(), before.as_slice());
        assert_eq!(h.events.served.len(), 3);
    }

    #[test]
    fn boarding_consumes_space() {
        let mut h = Harness::new(7, 4, 0.0);
        h.admit(RiderKind::Goggle);
        h.run(2);
        assert_eq!(h.building.elevator().available_space(), 3);
    }

    #[test]
    fn full_elevator_leaves_the_rest_queued() {
        let mut h = Harness::new(7, 4, 0.0);
        for _ in 0..10 {
            h.admit(RiderKind::Mugtome);
        }
        h.run(2);
        assert_eq!(h.building.elevator().available_space(), 0);
        assert_eq!(h.building.elevator().passengers().len(), 4);
        assert_eq!(queued_at(&h, FloorId::GROUND).len(), 6);
    }

    #[test]
    fn rival_is_deferred() {
        let mut h = Harness::new(7, 4, 0.0);
        let gg = h.admit(RiderKind::Goggle);
        let mu = h.admit(RiderKind::Mugtome);
        h.run(2);
        assert_eq!(h.building.elevator().passengers(), &[gg]);
        let rider = h.building.rider(mu).unwrap();
        assert!(rider.is_waiting_for_next());
        assert_eq!(h.building.placement(mu), Placement::Queued(FloorId::GROUND));
        // Re-queued with a fresh ticket and a fresh wait record.
        assert_eq!(rider.ticket(), Some(2));
        assert_eq!(h.events.joined.iter().filter(|(r, _)| *r == mu).count(), 2);
    }

    #[test]
    fn closing_doors_releases_deferred_riders() {
        let mut h = Harness::new(7, 4, 0.0);
        h.admit(RiderKind::Goggle);
        let mu = h.admit(RiderKind::Mugtome);
        h.run(2);
        assert!(h.building.rider(mu).unwrap().is_waiting_for_next());

        // Nothing left to do at the ground floor: the doors close.
        h.tick();
        assert_eq!(h.building.elevator().doors(), DoorState::Closed);
        assert!(!h.building.rider(mu).unwrap().is_waiting_for_next());
        assert_eq!(h.building.placement(mu), Placement::Queued(FloorId::GROUND));
    }

    #[test]
    fn direction_flips_when_work_is_only_behind() {
        let mut h = Harness::new(5, 4, 0.0);
        let up = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        h.building.land(up);
        h.with(|b, ctx| b.request_floor(up, Some(FloorId(4)), ctx));
        for _ in 0..20 {
            if h.building.placement(up) == Placement::OnFloor(FloorId(4)) {
                break;
            }
            h.tick();
        }
        assert_eq!(h.building.placement(up), Placement::OnFloor(FloorId(4)));
        h.tick();
        let e = h.building.elevator();
        assert_eq!((e.current_floor(), e.doors(), e.direction()), (FloorId(4), DoorState::Closed, Direction::Up));

        let down = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        h.building.land(down);
        h.with(|b, ctx| b.request_floor(down, Some(FloorId(2)), ctx));
        h.tick();
        let e = h.building.elevator();
        assert_eq!(e.direction(), Direction::Down);
        assert_eq!(e.current_floor(), FloorId(3));
    }

    #[test]
    fn rivals_never_share_the_car() {
        let mut h = Harness::new(7, 4, 0.0);
        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push((h.admit(RiderKind::Goggle), RiderKind::Goggle));
            ids.push((h.admit(RiderKind::Mugtome), RiderKind::Mugtome));
        }
        for _ in 0..300 {
            h.tick();
            let aboard = h.building.elevator().passengers();
            let goggles = aboard.iter().filter(|id| ids.iter().any(|(r, k)| r == *id && *k == RiderKind::Goggle)).count();
            let mugtomes = aboard.len() - goggles;
            assert!(goggles == 0 || mugtomes == 0, "rivals aboard together at {}", h.now);
        }
        // Everyone got where they were going.
        for (id, _) in ids {
            assert!(matches!(h.building.placement(id), Placement::OnFloor(_)));
        }
    }

    #[test]
    fn capacity_one_takes_one_of_two() {
        let mut h = Harness::new(7, 1, 0.0);
        let a = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        let c = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        h.building.land(a);
        h.building.land(c);
        h.with(|b, ctx| b.request_floor(a, Some(FloorId(2)), ctx));
        h.with(|b, ctx| b.request_floor(c, Some(FloorId(5)), ctx));
        h.run(2);
        assert_eq!(h.building.elevator().passengers(), &[a]);
        assert_eq!(queued_at(&h, FloorId::GROUND), vec![c]);
        assert_eq!(h.building.elevator().available_space(), 0);
    }

    #[test]
    fn rider_without_request_is_never_boarded() {
        let mut h = Harness::new(7, 1, 0.0);
        let id = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        h.building.land(id);
        assert!(h.with(|b, ctx| b.join_queue(id, ctx)));
        h.run(50);
        assert!(h.building.elevator().passengers().is_empty());
        assert_eq!(queued_at(&h, FloorId::GROUND), vec![id]);
    }

    #[test]
    fn rider_rides_to_target_and_lands() {
        let mut h = Harness::new(5, 4, 0.0);
        let id = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        h.building.land(id);
        h.with(|b, ctx| b.request_floor(id, Some(FloorId(3)), ctx));
        // open, board, close, 3 moves (opening on arrival), alight
        h.run(7);
        assert_eq!(h.building.placement(id), Placement::OnFloor(FloorId(3)));
        let e = h.building.elevator();
        assert_eq!(e.available_space(), 4);
        assert_eq!(e.pending_targets().count(), 0);
        assert_eq!(e.current_floor(), FloorId(3));
    }

    #[test]
    fn idle_elevator_returns_to_ground() {
        let mut h = Harness::new(5, 4, 0.0);
        let id = h.with(|b, _| b.spawn(RiderKind::NonDeveloper));
        h.building.land(id);
        h.with(|b, ctx| b.request_floor(id, Some(FloorId(3)), ctx));
        h.run(30);
        let e = h.building.elevator();
        assert!(e.current_floor().is_ground());
        assert_eq!(e.doors(), DoorState::Closed);
        assert_eq!(e.direction(), Direction::Up);
    }

    #[test]
    fn space_is_conserved() {
        let mut h = Harness::new(7, 4, 0.05);
        for kind in [RiderKind::Goggle, RiderKind::NonDeveloper, RiderKind::MaintenanceCrew, RiderKind::Client] {
            for _ in 0..3 {
                h.admit(kind);
            }
        }
        for _ in 0..500 {
            h.tick();
            let e = h.building.elevator();
            let aboard: usize = e
                .passengers()
                .iter()
                .map(|&id| h.building.rider(id).unwrap().required_space())
                .sum();
            assert_eq!(e.available_space() + aboard, e.capacity());
        }
    }
}

#[cfg(test)]
mod visitors {
    use lift_core::FloorId;
    use lift_rider::{Placement, RiderKind};

    use super::support::Harness;

    #[test]
    fn maintenance_crew_leaves_after_its_stay() {
        let mut h = Harness::new(7, 4, 0.0);
        let id = h.admit(RiderKind::MaintenanceCrew);
        h.run(12);
        assert_eq!(h.building.placement(id), Placement::OnFloor(FloorId(6)));
        let leave_at = h.building.rider(id).unwrap().visit().leave_at.unwrap();
        while h.now <= leave_at {
            h.tick();
        }
        let rider = h.building.rider(id).unwrap();
        assert_eq!(rider.request().unwrap().target(), FloorId::GROUND);
        assert_eq!(h.building.placement(id), Placement::Queued(FloorId(6)));

        h.run(60);
        assert_eq!(h.building.placement(id), Placement::Departed);
        assert_eq!(h.events.exited, vec![id]);
    }

    #[test]
    fn annoyed_client_complains_and_leaves() {
        let mut h = Harness::new(5, 4, 0.0);
        let id = h.with(|b, _| b.spawn(RiderKind::Client));
        h.building.land(id);
        h.with(|b, ctx| b.join_queue(id, ctx));
        let mut ticks = 0;
        while h.building.placement(id) == Placement::Queued(FloorId::GROUND) {
            h.tick();
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(ticks, 62);
        assert_eq!(h.events.complaints, vec![id]);
        assert_eq!(h.events.exited, vec![id]);
        assert_eq!(h.building.placement(id), Placement::Departed);
    }
}
