#[cfg(test)]
mod tests {
    use crate::droid::MaintenanceDroid;
    use crate::item::ItemKind;
    use crate::location::LocationId;
    use crate::player::{
        MoveError, PickUpError, Player, UseToolError, CRYSTAL_POINTS, REPAIR_POINTS, TOOL_POINTS,
    };
    use crate::world::World;

    use test_log::test;

    fn setup() -> (World, Player) {
        let world = World::new().expect("fixed world should validate");
        let player = Player::new(LocationId::MaintenanceTunnels);
        (world, player)
    }

    /// Shortest path to an open east exit: grab the tool, repair the droid.
    fn repair_droid(world: &mut World, player: &mut Player) {
        player.pick_up_tool(world).unwrap();
        player.use_tool_on_droid(world).unwrap();
    }

    #[test]
    fn test_move_case_and_whitespace_insensitive() {
        let (mut world, mut player) = setup();
        repair_droid(&mut world, &mut player);

        assert_eq!(player.move_to(&world, "  EAST  "), Ok(LocationId::DockingBay));
        assert_eq!(player.location(), LocationId::DockingBay);
        assert_eq!(player.move_to(&world, "West"), Ok(LocationId::MaintenanceTunnels));
        assert_eq!(player.location(), LocationId::MaintenanceTunnels);
    }

    #[test]
    fn test_move_no_such_exit() {
        let (world, mut player) = setup();
        let err = player.move_to(&world, "north").unwrap_err();
        assert_eq!(
            err,
            MoveError::NoSuchExit {
                direction: "north".to_string()
            }
        );
        assert_eq!(player.location(), LocationId::MaintenanceTunnels);
        assert_eq!(player.hazard_count(), 0);
    }

    #[test]
    fn test_blocked_move_counts_hazard_each_attempt() {
        let (world, mut player) = setup();

        for expected_hazards in 1..=3 {
            assert_eq!(player.move_to(&world, "east"), Err(MoveError::Blocked));
            assert_eq!(player.location(), LocationId::MaintenanceTunnels);
            assert_eq!(player.hazard_count(), expected_hazards);
        }
    }

    #[test]
    fn test_move_after_droid_repaired() {
        let (mut world, mut player) = setup();

        assert_eq!(player.move_to(&world, "east"), Err(MoveError::Blocked));
        assert_eq!(player.hazard_count(), 1);

        repair_droid(&mut world, &mut player);

        assert_eq!(player.move_to(&world, "east"), Ok(LocationId::DockingBay));
        assert_eq!(player.location(), LocationId::DockingBay);
        // No further hazards once the path is clear.
        assert_eq!(player.hazard_count(), 1);
    }

    #[test]
    fn test_blocking_is_direction_specific() {
        let (mut world, mut player) = setup();

        // Give the tunnels a second, unguarded exit. Only the guarded
        // direction ever blocks or counts hazards.
        world
            .location_mut(LocationId::MaintenanceTunnels)
            .add_exit("west", LocationId::DockingBay);

        assert_eq!(player.move_to(&world, "west"), Ok(LocationId::DockingBay));
        assert_eq!(player.hazard_count(), 0);
    }

    #[test]
    fn test_pick_up_tool_scores_once() {
        let (mut world, mut player) = setup();

        assert_eq!(player.pick_up_tool(&mut world), Ok(()));
        assert!(player.has_tool());
        assert_eq!(player.score(), TOOL_POINTS);
        assert!(!world.location(LocationId::MaintenanceTunnels).has_tool());

        // Second attempt at the now-empty location.
        assert_eq!(
            player.pick_up_tool(&mut world),
            Err(PickUpError::AlreadyHeld(ItemKind::DiagnosticTool))
        );
        assert_eq!(player.score(), TOOL_POINTS);
    }

    #[test]
    fn test_pick_up_tool_absent() {
        let (mut world, mut player) = setup();
        world.location_mut(LocationId::MaintenanceTunnels).remove_tool();

        assert_eq!(
            player.pick_up_tool(&mut world),
            Err(PickUpError::Absent(ItemKind::DiagnosticTool))
        );
        assert!(!player.has_tool());
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_pick_up_while_already_held_never_regrants() {
        let (mut world, mut player) = setup();
        player.pick_up_tool(&mut world).unwrap();

        // Even with another tool somehow present, holding one wins out.
        world.location_mut(LocationId::MaintenanceTunnels).place_tool();
        assert_eq!(
            player.pick_up_tool(&mut world),
            Err(PickUpError::AlreadyHeld(ItemKind::DiagnosticTool))
        );
        assert_eq!(player.score(), TOOL_POINTS);
        // The item was not consumed by the failed attempt.
        assert!(world.location(LocationId::MaintenanceTunnels).has_tool());
    }

    #[test]
    fn test_pick_up_crystal_scores_once() {
        let (mut world, mut player) = setup();
        repair_droid(&mut world, &mut player);
        player.move_to(&world, "east").unwrap();

        assert_eq!(player.pick_up_crystal(&mut world), Ok(()));
        assert!(player.has_crystal());
        assert_eq!(player.score(), TOOL_POINTS + REPAIR_POINTS + CRYSTAL_POINTS);

        assert_eq!(
            player.pick_up_crystal(&mut world),
            Err(PickUpError::AlreadyHeld(ItemKind::EnergyCrystal))
        );
        assert_eq!(player.score(), TOOL_POINTS + REPAIR_POINTS + CRYSTAL_POINTS);
    }

    #[test]
    fn test_use_tool_without_tool() {
        let (mut world, mut player) = setup();
        assert_eq!(
            player.use_tool_on_droid(&mut world),
            Err(UseToolError::NoTool)
        );
        assert_eq!(player.score(), 0);
        assert!(world
            .location(LocationId::MaintenanceTunnels)
            .droid()
            .unwrap()
            .droid
            .is_blocking());
    }

    #[test]
    fn test_use_tool_no_droid_here() {
        let (mut world, mut player) = setup();
        repair_droid(&mut world, &mut player);
        player.move_to(&world, "east").unwrap();

        assert_eq!(
            player.use_tool_on_droid(&mut world),
            Err(UseToolError::NoDroidHere)
        );
    }

    #[test]
    fn test_use_tool_succeeds_at_most_once() {
        let (mut world, mut player) = setup();
        player.pick_up_tool(&mut world).unwrap();

        assert_eq!(player.use_tool_on_droid(&mut world), Ok(()));
        assert_eq!(player.score(), TOOL_POINTS + REPAIR_POINTS);
        // The droid leaves its post after repair.
        assert!(world
            .location(LocationId::MaintenanceTunnels)
            .droid()
            .is_none());

        assert_eq!(
            player.use_tool_on_droid(&mut world),
            Err(UseToolError::NoDroidHere)
        );
        assert_eq!(player.score(), TOOL_POINTS + REPAIR_POINTS);
    }

    #[test]
    fn test_use_tool_on_already_repaired_droid() {
        let (mut world, mut player) = setup();
        player.pick_up_tool(&mut world).unwrap();

        // Post a repaired droid directly; only reachable through the
        // location API, but the outcome must still be distinct.
        let mut droid = MaintenanceDroid::new();
        droid.repair();
        world
            .location_mut(LocationId::MaintenanceTunnels)
            .post_droid(droid, "east");

        assert_eq!(
            player.use_tool_on_droid(&mut world),
            Err(UseToolError::AlreadyRepaired)
        );
        assert_eq!(player.score(), TOOL_POINTS);
    }

    #[test]
    fn test_round_trip_preserves_state() {
        let (mut world, mut player) = setup();
        repair_droid(&mut world, &mut player);
        let score_before = player.score();

        player.move_to(&world, "east").unwrap();
        player.move_to(&world, "west").unwrap();

        assert_eq!(player.location(), LocationId::MaintenanceTunnels);
        assert_eq!(player.score(), score_before);
        assert!(player.has_tool());
        assert!(!player.has_crystal());
        assert_eq!(player.hazard_count(), 0);
    }

    #[test]
    fn test_get_status() {
        let (world, mut player) = setup();
        player.move_to(&world, "east").unwrap_err();
        assert_eq!(player.get_status(), (0, 1));
    }
}
