//! The fixed station world, built once at startup.

use crate::droid::MaintenanceDroid;
use crate::location::{Location, LocationId};
use log::debug;

/// Owns the two locations and everything stationed in them. The graph is
/// wired at construction and validated before play begins; a malformed
/// graph is a setup fault, not something the action logic re-checks.
pub struct World {
    tunnels: Location,
    bay: Location,
}

impl World {
    pub fn new() -> Result<Self, String> {
        let mut tunnels = Location::new(
            "Maintenance Tunnels",
            "You are in the maintenance tunnels under the space station. \
             The walls are lined with pipes and conduits. \
             To the east is the Docking Bay.",
        );
        let mut bay = Location::new(
            "Docking Bay",
            "You are in the Docking Bay. \
             This is where ships come and go from the station. \
             To the west are the Maintenance Tunnels.",
        );

        tunnels.add_exit("east", LocationId::DockingBay);
        bay.add_exit("west", LocationId::MaintenanceTunnels);

        tunnels.place_tool();
        bay.place_crystal();

        // The damaged droid guards the only way out of the tunnels.
        tunnels.post_droid(MaintenanceDroid::new(), "east");

        let world = World { tunnels, bay };
        world.validate()?;
        debug!("world built: 2 locations, tool in tunnels, crystal in bay");
        Ok(world)
    }

    pub fn location(&self, id: LocationId) -> &Location {
        match id {
            LocationId::MaintenanceTunnels => &self.tunnels,
            LocationId::DockingBay => &self.bay,
        }
    }

    pub fn location_mut(&mut self, id: LocationId) -> &mut Location {
        match id {
            LocationId::MaintenanceTunnels => &mut self.tunnels,
            LocationId::DockingBay => &mut self.bay,
        }
    }

    /// Checks the wired graph: every location must be reachable (have at
    /// least one exit) and a stationed droid must guard a direction that is
    /// actually an exit of its location.
    fn validate(&self) -> Result<(), String> {
        for id in [LocationId::MaintenanceTunnels, LocationId::DockingBay] {
            let loc = self.location(id);
            if !loc.has_exits() {
                return Err(format!("world graph: {} has no exits", loc.name()));
            }
            if let Some(post) = loc.droid() {
                if loc.exit_to(&post.guarded_exit).is_none() {
                    return Err(format!(
                        "world graph: droid in {} guards '{}', which is not an exit",
                        loc.name(),
                        post.guarded_exit
                    ));
                }
            }
        }
        Ok(())
    }
}
