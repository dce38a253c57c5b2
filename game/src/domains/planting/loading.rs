use crate::planting::{Crop, PlantingDomain, Soil};

impl PlantingDomain {
    pub fn load_soils(&mut self, soils: Vec<Soil>) {
        self.soils.extend(soils);
    }

    pub fn load_crops(&mut self, crops: Vec<Crop>, sequence: usize) {
        self.crops_id.set(sequence);
        for crop in crops {
            self.crops_id.register(crop.id.0);
            if let Some(soil) = self.soils.iter_mut().find(|soil| soil.id == crop.soil) {
                soil.crop = Some(crop.id);
            }
            self.crops.push(crop);
        }
    }
}
