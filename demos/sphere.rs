use geosphere as geo;

use argh::FromArgs;

/// Generate a geodesic sphere and print its statistics.
#[derive(FromArgs)]
struct Args {
    /// number of subdivision passes
    #[argh(option, short = 's', default = "2")]
    subdivisions: u32,
    /// keep the source triangles of every pass
    #[argh(switch)]
    keep_source: bool,
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let mesh = if args.keep_source {
        let mut mesh = geo::Mesh::icosahedron();
        for _ in 0..args.subdivisions {
            mesh.subdivide(false);
        }
        mesh.normalize();
        mesh
    } else {
        use geo::Volume as _;
        let sphere = geo::Sphere::new(geo::SphereParameters {
            subdivisions: args.subdivisions,
            ..Default::default()
        });
        log::info!("Color data: {:?}", sphere.color_data());
        sphere.mesh().clone()
    };

    if let Err(e) = mesh.validate() {
        log::error!("Invalid mesh: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = mesh.check_unit_sphere(geo::UNIT_EPSILON) {
        log::warn!("{}", e);
    }

    println!(
        "vertices: {}, triangles: {}, vertex bytes: {}, index bytes: {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.vertex_bytes().len(),
        mesh.index_bytes().len(),
    );
}
