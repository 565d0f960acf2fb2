use em_fields::prelude::*;

fn main() {
    // Field samples with literal SI components.
    let mut e1 = ElectricFieldModel::new(0.0, 1.0e5, 1.0e3);
    let mut m1 = MagneticFieldModel::new(1.0e-4, 2.0e-4, 3.0e-4);

    println!("Initial Electric and Magnetic Field Components:");
    for field in [&e1 as &dyn Describe, &m1] {
        println!("{}", field.describe());
    }

    let q = 1.0e-6; // charge in coulombs
    let r = 0.05; // distance in meters
    e1.compute_field(q, r);
    println!("\nAfter calculating Electric Field:");
    println!("{}", e1.describe());

    let i = 10.0; // current in amperes
    m1.compute_field(i, r);
    println!("\nAfter calculating Magnetic Field:");
    println!("{}", m1.describe());

    // Component-wise sums; the results are uncalculated.
    let e2 = ElectricFieldModel::new(1.0e4, 2.0e4, 3.0e4);
    let e3 = e1.add(&e2);
    println!("\nAfter adding two Electric Fields:\n{e3}");

    let m2 = MagneticFieldModel::new(2.0e-4, 3.0e-4, 1.0e-4);
    let m3 = m1.add(&m2);
    println!("\nAfter adding two Magnetic Fields:\n{m3}");
}
