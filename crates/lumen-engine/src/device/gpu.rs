use std::collections::HashMap;

use anyhow::{Context, Result};

use super::shim::{BufferId, ComputeDevice, Scalar, SurfaceId};

/// Headless wgpu implementation of [`ComputeDevice`].
///
/// Shader conventions (the caller's WGSL must match):
/// - slot-bound storage buffers and storage textures live at
///   `@group(0) @binding(slot)`
/// - all named scalars/vectors are packed into a single uniform struct at
///   `@group(1) @binding(0)`, fields laid out in first-bind order with
///   WGSL uniform alignment (scalars 4, vec2 8, vec3/vec4 16)
/// - the compute entry point is named `main`
///
/// Buffers are allocated fresh on every `allocate_buffer` call, sized exactly
/// to the request; zero-element requests are clamped to one element so the
/// binding stays valid.
///
/// Resource lifetime: rebinding a slot releases the resource previously bound
/// there (unless another slot still references it), so per-frame buffers are
/// retired as their replacements are bound and resource counts stay bounded
/// by the number of slots in use. Handles to released resources are invalid.
pub struct WgpuDevice {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::ComputePipeline,

    buffers: HashMap<u32, wgpu::Buffer>,
    surfaces: HashMap<u32, Surface>,
    next_buffer: u32,
    next_surface: u32,

    /// slot → buffer, latest bind wins.
    bound_buffers: Vec<(u32, BufferId)>,
    /// slot → surface, latest bind wins.
    bound_textures: Vec<(u32, SurfaceId)>,

    uniforms: UniformBlock,
    uniform_buffer: Option<wgpu::Buffer>,
}

struct Surface {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    size: (u32, u32),
}

impl WgpuDevice {
    /// Creates a device and compiles the compute pipeline from WGSL source.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu; this blocks on
    /// it, intended for init-time use.
    pub fn new(shader_source: &str) -> Result<Self> {
        pollster::block_on(Self::new_async(shader_source))
    }

    async fn new_async(shader_source: &str) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("lumen-engine device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumen trace shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("lumen trace pipeline"),
            layout: None,
            module: &module,
            entry_point: Some("main"),
            compilation_options: Default::default(),
            cache: None,
        });

        log::debug!("wgpu device ready");

        Ok(Self {
            device,
            queue,
            pipeline,
            buffers: HashMap::new(),
            surfaces: HashMap::new(),
            next_buffer: 0,
            next_surface: 0,
            bound_buffers: Vec::new(),
            bound_textures: Vec::new(),
            uniforms: UniformBlock::default(),
            uniform_buffer: None,
        })
    }

    fn surface(&self, id: SurfaceId) -> Result<&Surface> {
        self.surfaces
            .get(&id.0)
            .with_context(|| format!("unknown surface {}", id.0))
    }

    fn write_uniforms(&mut self) {
        if self.uniforms.bytes.is_empty() {
            return;
        }

        let needed = self.uniforms.padded_len() as u64;
        let recreate = self
            .uniform_buffer
            .as_ref()
            .is_none_or(|b| b.size() < needed);

        if recreate {
            self.uniform_buffer = Some(self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("lumen uniforms"),
                size: needed,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }

        let buffer = self.uniform_buffer.as_ref().unwrap();
        let mut padded = self.uniforms.bytes.clone();
        padded.resize(needed as usize, 0);
        self.queue.write_buffer(buffer, 0, &padded);
    }
}

impl ComputeDevice for WgpuDevice {
    fn allocate_buffer(
        &mut self,
        element_count: usize,
        element_stride: usize,
    ) -> Result<BufferId> {
        // Zero-sized bindings are rejected by wgpu; an empty scene still needs
        // a valid buffer behind the binding.
        let size = (element_count.max(1) * element_stride) as u64;
        let size = size.next_multiple_of(wgpu::COPY_BUFFER_ALIGNMENT);

        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumen storage buffer"),
            size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let id = BufferId(self.next_buffer);
        self.next_buffer += 1;
        self.buffers.insert(id.0, buffer);
        Ok(id)
    }

    fn upload(&mut self, buffer: BufferId, data: &[u8]) -> Result<()> {
        let buf = self
            .buffers
            .get(&buffer.0)
            .with_context(|| format!("unknown buffer {}", buffer.0))?;
        anyhow::ensure!(
            data.len() as u64 <= buf.size(),
            "upload of {} bytes exceeds buffer size {}",
            data.len(),
            buf.size()
        );

        if !data.is_empty() {
            self.queue.write_buffer(buf, 0, data);
        }
        Ok(())
    }

    fn bind_buffer(&mut self, slot: u32, buffer: BufferId) {
        // Dropping the wgpu::Buffer releases the allocation; wgpu defers the
        // actual destruction until in-flight work no longer references it.
        if let Some(retired) = rebind_slot(&mut self.bound_buffers, slot, buffer) {
            self.buffers.remove(&retired.0);
        }
    }

    fn bind_scalar(&mut self, name: &str, value: Scalar) {
        match value {
            Scalar::U32(v) => self.uniforms.set(name, &v.to_le_bytes(), 4),
            Scalar::F32(v) => self.uniforms.set(name, &v.to_le_bytes(), 4),
        }
    }

    fn bind_vector(&mut self, name: &str, values: &[f32]) {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        let align = match values.len() {
            0 | 1 => 4,
            2 => 8,
            _ => 16,
        };
        self.uniforms.set(name, &bytes, align);
    }

    fn create_surface(&mut self, width: u32, height: u32) -> Result<SurfaceId> {
        let size = (width.max(1), height.max(1));
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("lumen surface"),
            size: wgpu::Extent3d {
                width: size.0,
                height: size.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::STORAGE_BINDING
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(
            id.0,
            Surface {
                texture,
                view,
                size,
            },
        );
        Ok(id)
    }

    fn bind_texture(&mut self, slot: u32, name: &str, surface: SurfaceId) {
        log::trace!("bind texture '{name}' at slot {slot}");
        if let Some(retired) = rebind_slot(&mut self.bound_textures, slot, surface) {
            self.surfaces.remove(&retired.0);
        }
    }

    fn dispatch(&mut self, groups_x: u32, groups_y: u32, groups_z: u32) -> Result<()> {
        self.write_uniforms();

        let mut entries = Vec::new();
        for &(slot, id) in &self.bound_buffers {
            let buf = self
                .buffers
                .get(&id.0)
                .with_context(|| format!("bound buffer {} no longer exists", id.0))?;
            entries.push(wgpu::BindGroupEntry {
                binding: slot,
                resource: buf.as_entire_binding(),
            });
        }
        for &(slot, id) in &self.bound_textures {
            let surface = self.surface(id)?;
            entries.push(wgpu::BindGroupEntry {
                binding: slot,
                resource: wgpu::BindingResource::TextureView(&surface.view),
            });
        }

        let resources = (!entries.is_empty()).then(|| {
            self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("lumen resources"),
                layout: &self.pipeline.get_bind_group_layout(0),
                entries: &entries,
            })
        });

        let uniforms = self.uniform_buffer.as_ref().map(|buffer| {
            self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("lumen uniform block"),
                layout: &self.pipeline.get_bind_group_layout(1),
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("lumen dispatch encoder"),
            });

        {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("lumen trace pass"),
                timestamp_writes: None,
            });
            pass.set_pipeline(&self.pipeline);
            if let Some(bg) = &resources {
                pass.set_bind_group(0, bg, &[]);
            }
            if let Some(bg) = &uniforms {
                pass.set_bind_group(1, bg, &[]);
            }
            pass.dispatch_workgroups(groups_x, groups_y, groups_z);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        Ok(())
    }

    fn blit(&mut self, source: SurfaceId, destination: SurfaceId) -> Result<()> {
        let src = self.surface(source)?;
        let dst = self.surface(destination)?;
        anyhow::ensure!(
            src.size == dst.size,
            "blit size mismatch: {:?} -> {:?}",
            src.size,
            dst.size
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("lumen blit encoder"),
            });
        encoder.copy_texture_to_texture(
            src.texture.as_image_copy(),
            dst.texture.as_image_copy(),
            wgpu::Extent3d {
                width: src.size.0,
                height: src.size.1,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(std::iter::once(encoder.finish()));
        Ok(())
    }
}

/// Replaces the binding at `slot` and returns the previously bound resource,
/// provided it differs and no other slot still references it. The caller owns
/// releasing the returned resource.
fn rebind_slot<T: Copy + Eq>(bindings: &mut Vec<(u32, T)>, slot: u32, value: T) -> Option<T> {
    let previous = bindings
        .iter()
        .position(|(s, _)| *s == slot)
        .map(|i| bindings.remove(i).1);
    bindings.push((slot, value));

    previous.filter(|&old| old != value && !bindings.iter().any(|&(_, v)| v == old))
}

/// Named uniform fields packed into one byte block.
///
/// Fields are appended at their WGSL-aligned offset the first time a name is
/// bound; later binds overwrite in place. Field order therefore follows bind
/// order, which the shader-side struct must mirror.
#[derive(Debug, Default)]
struct UniformBlock {
    fields: Vec<UniformField>,
    bytes: Vec<u8>,
}

#[derive(Debug)]
struct UniformField {
    name: String,
    offset: usize,
    size: usize,
}

impl UniformBlock {
    fn set(&mut self, name: &str, data: &[u8], align: usize) {
        if let Some(i) = self.fields.iter().position(|f| f.name == name) {
            let (offset, size) = (self.fields[i].offset, self.fields[i].size);

            if data.len() <= size {
                self.bytes[offset..offset + data.len()].copy_from_slice(data);
                self.bytes[offset + data.len()..offset + size].fill(0);
                return;
            }

            // A name rebound wider no longer fits its slot. Zero the old slot
            // and relocate the field to the end of the block; either way the
            // shader-side struct has to change to match.
            log::warn!(
                "uniform '{name}' grew from {size} to {} bytes; relocating",
                data.len()
            );
            self.bytes[offset..offset + size].fill(0);
            let offset = self.append(data, align);
            self.fields[i].offset = offset;
            self.fields[i].size = data.len();
            return;
        }

        let offset = self.append(data, align);
        self.fields.push(UniformField {
            name: name.to_owned(),
            offset,
            size: data.len(),
        });
    }

    fn append(&mut self, data: &[u8], align: usize) -> usize {
        let offset = self.bytes.len().next_multiple_of(align);
        self.bytes.resize(offset, 0);
        self.bytes.extend_from_slice(data);
        offset
    }

    /// Block length rounded up to the 16-byte uniform struct size.
    fn padded_len(&self) -> usize {
        self.bytes.len().next_multiple_of(16)
    }
}

#[cfg(test)]
mod tests {
    use super::{UniformBlock, rebind_slot};
    use crate::device::BufferId;

    // ── uniform block ─────────────────────────────────────────────────────

    #[test]
    fn fields_pack_at_aligned_offsets() {
        let mut block = UniformBlock::default();
        block.set("a", &1.0f32.to_le_bytes(), 4); // offset 0
        block.set("b", &[0u8; 8], 8); // offset 8 (aligned up from 4)
        block.set("c", &2u32.to_le_bytes(), 4); // offset 16

        assert_eq!(block.fields[0].offset, 0);
        assert_eq!(block.fields[1].offset, 8);
        assert_eq!(block.fields[2].offset, 16);
        assert_eq!(block.padded_len(), 32);
    }

    #[test]
    fn rebinding_overwrites_in_place() {
        let mut block = UniformBlock::default();
        block.set("x", &1.0f32.to_le_bytes(), 4);
        block.set("y", &2.0f32.to_le_bytes(), 4);
        let len = block.bytes.len();

        block.set("x", &9.0f32.to_le_bytes(), 4);
        assert_eq!(block.bytes.len(), len);
        assert_eq!(&block.bytes[0..4], &9.0f32.to_le_bytes());
    }

    #[test]
    fn rebinding_narrower_zero_pads_the_slot() {
        let mut block = UniformBlock::default();
        block.set("v", &[0xFFu8; 8], 8);
        block.set("v", &1.0f32.to_le_bytes(), 8);

        assert_eq!(&block.bytes[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&block.bytes[4..8], &[0u8; 4]);
    }

    #[test]
    fn rebinding_wider_relocates_without_panicking() {
        let mut block = UniformBlock::default();
        block.set("v", &[0xAAu8; 4], 4);
        block.set("w", &[0xBBu8; 4], 4);
        block.set("v", &[0xCCu8; 12], 16);

        // Old slot is zeroed, neighbor untouched, field lives at the end now.
        assert_eq!(&block.bytes[0..4], &[0u8; 4]);
        assert_eq!(&block.bytes[4..8], &[0xBBu8; 4]);
        let v = &block.fields[0];
        assert_eq!(v.offset, 16);
        assert_eq!(v.size, 12);
        assert_eq!(&block.bytes[16..28], &[0xCCu8; 12]);
    }

    // ── slot rebinding ────────────────────────────────────────────────────

    #[test]
    fn rebind_retires_the_previous_resource() {
        let mut bindings = Vec::new();
        assert_eq!(rebind_slot(&mut bindings, 1, BufferId(0)), None);
        assert_eq!(rebind_slot(&mut bindings, 2, BufferId(1)), None);

        // Next frame's buffer replaces slot 1; the old one is retired.
        assert_eq!(rebind_slot(&mut bindings, 1, BufferId(2)), Some(BufferId(0)));
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn rebind_with_same_resource_retires_nothing() {
        let mut bindings = Vec::new();
        rebind_slot(&mut bindings, 1, BufferId(0));
        assert_eq!(rebind_slot(&mut bindings, 1, BufferId(0)), None);
    }

    #[test]
    fn resource_bound_at_two_slots_is_not_retired() {
        let mut bindings = Vec::new();
        rebind_slot(&mut bindings, 1, BufferId(0));
        rebind_slot(&mut bindings, 2, BufferId(0));

        // Slot 1 moves on, but slot 2 still references buffer 0.
        assert_eq!(rebind_slot(&mut bindings, 1, BufferId(5)), None);
        // Once slot 2 moves on too, buffer 0 is retired.
        assert_eq!(rebind_slot(&mut bindings, 2, BufferId(6)), Some(BufferId(0)));
    }
}
