use drape::{Cloth, ClothConfig, FrameInput, NoOpStepObserver, SphereCollider, Vec3};

#[test]
fn cloth_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut cloth: Cloth<f32> = Cloth::new(&ClothConfig::new(6, 6).with_rest_distance(0.5)).unwrap();
        let ball = SphereCollider::new(Vec3::new(0.0, -1.0, 0.0), 0.8);
        let input = FrameInput::new(ball).with_wind(Vec3::new(30.0, 0.0, -30.0));
        for _ in 0..60 {
            cloth.step(1.0 / 60.0, &input, &mut NoOpStepObserver).unwrap();
        }
        cloth.positions()
    }).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}
